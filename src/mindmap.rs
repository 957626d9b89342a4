//! Markdown to mind-map transformation.
//!
//! The renderer behind [`render::render_mindmap`](crate::render::render_mindmap).
//! Three steps, mirroring the markmap pipeline:
//!
//! 1. [`transform`] — parse Markdown into a hierarchical [`MmNode`] tree plus
//!    the [`Features`] the document actually uses (math, code).
//! 2. [`used_assets`] / [`with_toolbar`] — compute the CDN asset list for
//!    those features, optionally augmented with the pinned toolbar.
//! 3. [`fill_template`] — embed the tree as JSON in a self-contained HTML
//!    page that renders it as a collapsible tree in the browser.
//!
//! Tree shape: headings nest by level (`#` over `##` over `###`); list items
//! nest below the heading they appear under, one level per list depth. Other
//! block content does not contribute nodes.

use maud::{DOCTYPE, PreEscaped, html};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MindMapError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One node of the mind-map tree. Serialized to JSON into the page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MmNode {
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MmNode>,
}

/// Markdown features observed during [`transform`], used to pick assets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Features {
    /// Document contains TeX math.
    pub math: bool,
    /// Document contains code blocks.
    pub code: bool,
}

/// A single page asset.
#[derive(Debug, Clone)]
pub enum Asset {
    Stylesheet { href: String },
    Script { src: String },
    /// Inline script run after the view scripts have loaded.
    Iife { body: String },
}

/// Assets for one mind-map page, in emission order.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub styles: Vec<Asset>,
    pub scripts: Vec<Asset>,
}

const D3_URL: &str = "https://cdn.jsdelivr.net/npm/d3@6";
const VIEW_URL: &str = "https://cdn.jsdelivr.net/npm/markmap-view@0.2.7";
const KATEX_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/katex@0.16/dist/katex.min.css";
const KATEX_JS_URL: &str = "https://cdn.jsdelivr.net/npm/katex@0.16/dist/katex.min.js";
const PRISM_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/prismjs@1/themes/prism.css";

/// Pinned toolbar release; the CDN URLs below embed this version.
pub const TOOLBAR_VERSION: &str = "0.1.4";

/// Attaches the toolbar bottom-right once the view has been created.
const TOOLBAR_IIFE: &str = "\
setTimeout(() => {
  const toolbar = new markmap.Toolbar();
  toolbar.attach(mm);
  const el = toolbar.render();
  el.setAttribute('style', 'position:absolute;bottom:20px;right:20px');
  document.body.append(el);
});";

const MM_CSS: &str = "\
* { margin: 0; padding: 0; }
#mindmap { display: block; width: 100vw; height: 100vh; }";

/// Heading depths occupy 1..=6; list items nest below them.
const ITEM_DEPTH_BASE: usize = 6;

/// Parse Markdown text into a mind-map tree and its feature set.
pub fn transform(source: &str) -> (MmNode, Features) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_MATH);

    let mut items: Vec<(usize, String)> = Vec::new();
    let mut features = Features::default();
    let mut buf = String::new();
    let mut capture: Option<Capture> = None;
    let mut list_depth = 0usize;

    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                buf.clear();
                capture = Some(Capture::Heading(level as usize));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(Capture::Heading(depth)) = capture.take() {
                    push_item(&mut items, depth, &mut buf);
                }
            }
            Event::Start(Tag::List(_)) => {
                // A nested list ends its parent item's own text.
                if matches!(capture, Some(Capture::Item)) {
                    capture = None;
                    push_item(&mut items, ITEM_DEPTH_BASE + list_depth, &mut buf);
                }
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) => {
                buf.clear();
                capture = Some(Capture::Item);
            }
            Event::End(TagEnd::Item) => {
                if let Some(Capture::Item) = capture.take() {
                    push_item(&mut items, ITEM_DEPTH_BASE + list_depth, &mut buf);
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                features.code = true;
            }
            Event::Text(text) => {
                if capture.is_some() {
                    buf.push_str(&text);
                }
            }
            Event::Code(code) => {
                if capture.is_some() {
                    buf.push('`');
                    buf.push_str(&code);
                    buf.push('`');
                }
            }
            Event::InlineMath(math) => {
                features.math = true;
                if capture.is_some() {
                    buf.push('$');
                    buf.push_str(&math);
                    buf.push('$');
                }
            }
            Event::DisplayMath(math) => {
                features.math = true;
                if capture.is_some() {
                    buf.push_str("$$");
                    buf.push_str(&math);
                    buf.push_str("$$");
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if capture.is_some() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    let mut cursor = 0;
    let mut top = build_children(&items, &mut cursor, 0);
    let root = if top.len() == 1 {
        top.remove(0)
    } else {
        MmNode {
            content: String::new(),
            children: top,
        }
    };

    (root, features)
}

enum Capture {
    Heading(usize),
    Item,
}

fn push_item(items: &mut Vec<(usize, String)>, depth: usize, buf: &mut String) {
    let content = buf.trim().to_string();
    buf.clear();
    if !content.is_empty() {
        items.push((depth, content));
    }
}

/// Fold the flat `(depth, content)` outline into a tree: an item's children
/// are the following items of strictly greater depth.
fn build_children(items: &[(usize, String)], cursor: &mut usize, min_depth: usize) -> Vec<MmNode> {
    let mut nodes = Vec::new();
    while *cursor < items.len() && items[*cursor].0 > min_depth {
        let (depth, content) = items[*cursor].clone();
        *cursor += 1;
        let children = build_children(items, cursor, depth);
        nodes.push(MmNode { content, children });
    }
    nodes
}

/// Assets required by the given feature set.
pub fn used_assets(features: &Features) -> Assets {
    let mut assets = Assets::default();

    assets.scripts.push(Asset::Script {
        src: D3_URL.to_string(),
    });
    assets.scripts.push(Asset::Script {
        src: VIEW_URL.to_string(),
    });

    if features.math {
        assets.styles.push(Asset::Stylesheet {
            href: KATEX_CSS_URL.to_string(),
        });
        assets.scripts.push(Asset::Script {
            src: KATEX_JS_URL.to_string(),
        });
    }
    if features.code {
        assets.styles.push(Asset::Stylesheet {
            href: PRISM_CSS_URL.to_string(),
        });
    }

    assets
}

/// Append the pinned toolbar stylesheet, script, and attach snippet.
pub fn with_toolbar(mut assets: Assets) -> Assets {
    assets.styles.push(Asset::Stylesheet {
        href: format!(
            "https://cdn.jsdelivr.net/npm/markmap-toolbar@{TOOLBAR_VERSION}/dist/style.min.css"
        ),
    });
    assets.scripts.push(Asset::Script {
        src: format!("https://cdn.jsdelivr.net/npm/markmap-toolbar@{TOOLBAR_VERSION}"),
    });
    assets.scripts.push(Asset::Iife {
        body: TOOLBAR_IIFE.to_string(),
    });
    assets
}

/// Render the tree and assets into a single self-contained HTML document.
///
/// The tree is embedded as JSON; a boot script creates the view over it, and
/// any IIFE assets run after that (asset order is preserved).
pub fn fill_template(root: &MmNode, assets: &Assets) -> Result<String, MindMapError> {
    let data = serde_json::to_string(root)?;
    let boot = format!(
        "const root = {data};\n\
         const mm = markmap.Markmap.create(document.querySelector('#mindmap'), null, root);"
    );

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (root.content) }
                style { (PreEscaped(MM_CSS)) }
                @for asset in &assets.styles {
                    @match asset {
                        Asset::Stylesheet { href } => {
                            link rel="stylesheet" href=(href);
                        }
                        _ => {}
                    }
                }
            }
            body {
                svg id="mindmap" {}
                @for asset in &assets.scripts {
                    @match asset {
                        Asset::Script { src } => {
                            script src=(src) {}
                        }
                        _ => {}
                    }
                }
                script { (PreEscaped(&boot)) }
                @for asset in &assets.scripts {
                    @match asset {
                        Asset::Iife { body } => {
                            script { (PreEscaped(body)) }
                        }
                        _ => {}
                    }
                }
            }
        }
    };

    Ok(markup.into_string())
}
