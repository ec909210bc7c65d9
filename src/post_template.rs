use std::fmt::Write;

use crate::text_utils::format_epoch;

pub const HEADER_SEPARATOR: &str = "###";
pub const PLACEHOLDER_BODY: &str = "Your content here (Markdown or HTML)";

/// Header fields, in the order the site generator expects them
fn render_header(date: f64) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "title:None");
    let _ = writeln!(&mut buf, "tags:");
    let _ = writeln!(&mut buf, "summary:");
    let _ = writeln!(&mut buf, "static_icon:");
    let _ = writeln!(&mut buf, "parse:");
    let _ = writeln!(&mut buf, "date:{}", format_epoch(date));
    let _ = writeln!(&mut buf, "{}", HEADER_SEPARATOR);
    buf
}

fn render_body() -> String {
    let mut buf = String::new();
    let _ = writeln!(&mut buf, "{}", PLACEHOLDER_BODY);
    buf
}

pub fn render_post(date: f64) -> String {
    let mut post = render_header(date);
    post.push_str(&render_body());
    post
}

#[cfg(test)]
mod tests {
    use crate::test_data::POST_DATA;

    use super::*;

    #[test]
    fn test_happy_case() {
        assert_eq!(render_post(978363000.0), POST_DATA);
    }

    #[test]
    fn test_fractional_date() {
        let post = render_post(1700000000.123456);
        assert!(post.contains("\ndate:1700000000.123456\n###\n"));
    }
}
