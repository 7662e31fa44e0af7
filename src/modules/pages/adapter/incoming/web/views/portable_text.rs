//! HTML rendering for portable text.

use maud::{html, Markup};

use crate::modules::content::application::domain::portable_text::{
    BlockStyle, ListKind, PortableBlock, Span, TextBlock,
};

/// Renders blocks in order. Runs of list items with the same kind share one
/// `<ul>`/`<ol>`; unsupported blocks are skipped.
pub fn render(blocks: &[PortableBlock]) -> Markup {
    let text_blocks: Vec<&TextBlock> = blocks
        .iter()
        .filter_map(|b| match b {
            PortableBlock::Text(block) => Some(block),
            PortableBlock::Unsupported => None,
        })
        .collect();

    let mut groups: Vec<(Option<ListKind>, Vec<&TextBlock>)> = Vec::new();
    for block in text_blocks {
        let continues_list = matches!(
            (block.list_item, groups.last()),
            (Some(kind), Some((Some(open), _))) if *open == kind
        );
        if continues_list {
            if let Some((_, items)) = groups.last_mut() {
                items.push(block);
            }
        } else {
            groups.push((block.list_item, vec![block]));
        }
    }

    html! {
        @for (kind, items) in &groups {
            @match kind {
                Some(ListKind::Bullet) => {
                    ul { @for item in items { li { (inline(item)) } } }
                },
                Some(ListKind::Number) => {
                    ol { @for item in items { li { (inline(item)) } } }
                },
                None => {
                    @for block in items { (text_block(block)) }
                },
            }
        }
    }
}

fn text_block(block: &TextBlock) -> Markup {
    let content = inline(block);
    match block.block_style() {
        BlockStyle::Normal => html! { p { (content) } },
        BlockStyle::Blockquote => html! { blockquote { (content) } },
        BlockStyle::Heading(1) => html! { h1 { (content) } },
        BlockStyle::Heading(2) => html! { h2 { (content) } },
        BlockStyle::Heading(3) => html! { h3 { (content) } },
        BlockStyle::Heading(4) => html! { h4 { (content) } },
        BlockStyle::Heading(5) => html! { h5 { (content) } },
        BlockStyle::Heading(_) => html! { h6 { (content) } },
    }
}

fn inline(block: &TextBlock) -> Markup {
    html! {
        @for span in block.spans() {
            (marked(block, span, &span.marks))
        }
    }
}

/// Wraps the span text in its marks, outermost first.
fn marked(block: &TextBlock, span: &Span, marks: &[String]) -> Markup {
    let Some((mark, rest)) = marks.split_first() else {
        return html! { (span.text) };
    };
    let inner = marked(block, span, rest);

    match mark.as_str() {
        "strong" => html! { strong { (inner) } },
        "em" => html! { em { (inner) } },
        "code" => html! { code { (inner) } },
        "underline" => html! { u { (inner) } },
        "strike-through" => html! { s { (inner) } },
        key => match block.link_for(key) {
            Some(href) => html! { a href=(href) target="_blank" rel="noopener noreferrer" { (inner) } },
            None => inner,
        },
    }
}
