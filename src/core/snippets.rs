//! Quick-start integration snippets shown by `apex snippet` and the TUI viewer.

use crate::core::request::RUN_INFERENCE_PATH;

/// Language of an integration snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SnippetLang {
    Python,
    Node,
    Curl,
}

impl SnippetLang {
    pub const ALL: [SnippetLang; 3] = [SnippetLang::Python, SnippetLang::Node, SnippetLang::Curl];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            SnippetLang::Python => "Python",
            SnippetLang::Node => "Node.js",
            SnippetLang::Curl => "cURL",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SnippetLang::Python => SnippetLang::Node,
            SnippetLang::Node => SnippetLang::Curl,
            SnippetLang::Curl => SnippetLang::Python,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SnippetLang::Python => SnippetLang::Curl,
            SnippetLang::Node => SnippetLang::Python,
            SnippetLang::Curl => SnippetLang::Node,
        }
    }
}

/// Snippet source for `lang`, pointed at `base_url`.
pub fn snippet(lang: SnippetLang, base_url: &str) -> String {
    let url = format!("{}{}", base_url, RUN_INFERENCE_PATH);
    match lang {
        SnippetLang::Python => format!(
            r#"import requests

# 1. Setup
API_KEY = "your_key_here"
URL = "{url}"

# 2. Send Chat Log
resp = requests.post(
    URL,
    json={{"messages": [{{"text": "hello world"}}]}},
    headers={{"Authorization": f"Bearer {{API_KEY}}"}}
)

# 3. View Safety Result
print(resp.json())"#
        ),
        SnippetLang::Node => format!(
            r#"const axios = require('axios');

// 1. Setup
const API_KEY = "your_key_here";
const URL = "{url}";

// 2. Send Chat Log
const response = await axios.post(URL, {{
    messages: [{{ text: "hello world" }}]
  }}, {{
    headers: {{ Authorization: `Bearer ${{API_KEY}}` }}
}});

// 3. View Safety Result
console.log(response.data);"#
        ),
        SnippetLang::Curl => format!(
            r#"# Quick Terminal Test
curl -X POST {url} \
  -H "Authorization: Bearer <YOUR_KEY>" \
  -H "Content-Type: application/json" \
  -d '{{ "messages": [{{"text": "hello"}}] }}'"#
        ),
    }
}
