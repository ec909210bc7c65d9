#[cfg(test)]
pub const POST_DATA: &str = "title:None
tags:
summary:
static_icon:
parse:
date:978363000.0
###
Your content here (Markdown or HTML)
";
