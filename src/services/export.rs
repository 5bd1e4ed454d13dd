//! # 아이디어 내보내기
//!
//! 마지막으로 생성된 아이디어를 그대로 저장할 수 있는 HTML 문서 하나로 만듭니다.
//! 외부 리소스(CSS, 폰트, 스크립트)를 참조하지 않아 파일 하나로 열립니다.

use chrono::NaiveDate;

/// HTML 특수 문자 이스케이프
///
/// 생성된 텍스트는 신뢰할 수 없는 외부 응답이므로 그대로 넣지 않습니다.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 정제를 거친 주제는 `<`, `>`가 이미 엔티티라서 원래 문자로 되돌린 뒤 한 번만 이스케이프합니다.
fn plain_topic(topic: &str) -> String {
    topic.replace("&lt;", "<").replace("&gt;", ">")
}

/// 내보내기 문서를 만듭니다. 줄바꿈은 `<br>`로 유지됩니다.
pub fn render_export(content: &str, topic: &str, date: NaiveDate) -> String {
    let topic = escape_html(&plain_topic(topic));
    let body = escape_html(content).replace('\n', "<br>\n");
    let generated_on = date.format("%Y-%m-%d");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>YogaGlow Ideas for {topic}</title>
    <style>
        body {{
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            line-height: 1.6;
            color: #333;
            background-color: #f8fafc;
        }}
        .header {{
            text-align: center;
            padding-bottom: 30px;
            border-bottom: 2px solid #e2e8f0;
            margin-bottom: 30px;
        }}
        .logo {{ font-size: 2rem; color: #8B5CF6; margin-bottom: 10px; }}
        .content-card {{
            background: white;
            padding: 30px;
            border-radius: 12px;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
            margin-bottom: 20px;
        }}
        h1, h2, h3 {{ color: #1e293b; }}
        .date {{ color: #64748b; font-size: 0.9rem; }}
    </style>
</head>
<body>
    <div class="header">
        <div class="logo">🧘 YogaGlow</div>
        <h1>Content Ideas: {topic}</h1>
        <div class="date">Generated on {generated_on}</div>
    </div>
    <div class="content-card">
{body}
    </div>
</body>
</html>
"#
    )
}

/// `yoga_ideas_<slug>_<YYYYMMDD>.html`
///
/// 주제가 비어 있거나 슬러그로 만들 문자가 없으면 `ideas`를 씁니다.
pub fn export_file_name(topic: &str, date: NaiveDate) -> String {
    let slug = slug::slugify(plain_topic(topic)).replace('-', "_");
    let slug = if slug.is_empty() { "ideas".to_string() } else { slug };
    format!("yoga_ideas_{}_{}.html", slug, date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn document_has_header_and_preserves_line_breaks() {
        let html = render_export("Idea 1\nIdea 2", "desk yoga", day());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>YogaGlow Ideas for desk yoga</title>"));
        assert!(html.contains("Generated on 2026-03-14"));
        assert!(html.contains("Idea 1<br>\nIdea 2"));
    }

    #[test]
    fn generated_text_is_escaped() {
        let html = render_export("<script>alert('x')</script> & more", "a <b>", day());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert!(html.contains("Content Ideas: a &lt;b&gt;"));
    }

    #[test]
    fn sanitized_topic_is_not_escaped_twice() {
        let topic = crate::services::sanitizer::sanitize("flow <calm>");
        assert_eq!(topic, "flow &lt;calm&gt;");

        let html = render_export("Idea", &topic, day());
        assert!(html.contains("Content Ideas: flow &lt;calm&gt;"));
        assert!(!html.contains("&amp;lt;"));
        assert_eq!(export_file_name(&topic, day()), "yoga_ideas_flow_calm_20260314.html");
    }

    #[test]
    fn file_name_uses_slug_and_compact_date() {
        assert_eq!(
            export_file_name("Yoga for Runners", day()),
            "yoga_ideas_yoga_for_runners_20260314.html"
        );
        assert_eq!(export_file_name("  ", day()), "yoga_ideas_ideas_20260314.html");
    }
}
