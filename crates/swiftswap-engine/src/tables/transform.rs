//! Restructuring of classified tables into scroll-wrapped sticky layouts

use swiftswap_dom::{ClassList, DomTree, NodeId};
use swiftswap_html::{inner_html, set_inner_html};

use super::TableError;
use super::classify::{StickyTopGroup, WRAPPER_CLASS};

const TABLE_STYLE: &str = "min-width:600px; width:100%";
const WRAPPER_STYLE: &str = "max-height:300px";
const CELL_CLASS: &str = "text-nowrap text-mono";
const FIRST_HEADER_STYLE: &str = "width:140px";
const FIRST_CELL_STYLE: &str = "background-color:#DE4407; color:#ffffff;";

/// Edge a wrapped table sticks to while scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyPosition {
    Left,
    Top,
}

impl StickyPosition {
    pub const ALL: [StickyPosition; 2] = [StickyPosition::Left, StickyPosition::Top];

    pub fn as_str(self) -> &'static str {
        match self {
            StickyPosition::Left => "left",
            StickyPosition::Top => "top",
        }
    }

    /// Wrapper class for this position
    pub fn class_name(self) -> &'static str {
        match self {
            StickyPosition::Left => "sticky-left",
            StickyPosition::Top => "sticky-top",
        }
    }
}

/// Wrap `table` in a scroll container `<div>`
///
/// Returns the wrapper, or `None` when the table has no parent.
pub fn wrap_table(
    tree: &mut DomTree,
    table: NodeId,
    positions: &[StickyPosition],
) -> Result<Option<NodeId>, TableError> {
    if tree.parent(table).is_none() {
        return Ok(None);
    }

    let classes: ClassList = std::iter::once(WRAPPER_CLASS)
        .chain(positions.iter().map(|position| position.class_name()))
        .collect();

    let wrapper = tree.create_element("div");
    tree.set_class_list(wrapper, &classes)?;
    tree.set_attribute(wrapper, "style", WRAPPER_STYLE)?;
    tree.wrap(table, wrapper)?;
    Ok(Some(wrapper))
}

/// Merge a head table and its body tables into one table with a header row
///
/// Header labels are the head table's `<td>` contents; each body table
/// contributes one row built from its `<td>` contents. Body tables are
/// removed from the document.
pub fn transform_sticky_top(tree: &mut DomTree, group: &StickyTopGroup) -> Result<(), TableError> {
    let header_cells = tree.get_elements_by_tag_name(group.head, "td");
    let headers = cell_contents(tree, &header_cells);
    for cell in header_cells {
        tree.detach(cell)?;
    }

    let mut rows = Vec::with_capacity(group.body.len());
    for &body in &group.body {
        let cells = tree.get_elements_by_tag_name(body, "td");
        rows.push(cell_contents(tree, &cells));
        tree.detach(body)?;
    }

    let markup = render_sections(&headers, &rows, None, None);
    set_inner_html(tree, group.head, &markup)?;
    restyle_table(tree, group.head, "table text-center")?;
    wrap_table(tree, group.head, &[StickyPosition::Top])?;
    Ok(())
}

/// Restyle cells in place and pin the first column
pub fn transform_sticky_left(tree: &mut DomTree, table: NodeId) -> Result<(), TableError> {
    for th in tree.get_elements_by_tag_name(table, "th") {
        tree.set_class_name(th, CELL_CLASS)?;
        tree.set_attribute(th, "scope", "row")?;
        tree.remove_attribute(th, "style")?;
    }
    for td in tree.get_elements_by_tag_name(table, "td") {
        tree.set_class_name(td, CELL_CLASS)?;
        tree.remove_attribute(td, "style")?;
    }

    restyle_table(tree, table, "table")?;
    wrap_table(tree, table, &[StickyPosition::Left])?;
    Ok(())
}

/// Promote the first row to a header and pin both the header and first column
pub fn transform_sticky_both(tree: &mut DomTree, table: NodeId) -> Result<(), TableError> {
    let mut headers = Vec::new();
    if let Some(first_row) = tree.first_element_by_tag_name(table, "tr") {
        headers = row_contents(tree, first_row);
        tree.detach(first_row)?;
    }

    let rows: Vec<Vec<String>> = tree
        .get_elements_by_tag_name(table, "tr")
        .into_iter()
        .map(|row| row_contents(tree, row))
        .collect();

    let markup = render_sections(&headers, &rows, Some(FIRST_HEADER_STYLE), Some(FIRST_CELL_STYLE));
    set_inner_html(tree, table, &markup)?;
    restyle_table(tree, table, "table text-center")?;
    wrap_table(tree, table, &[StickyPosition::Left, StickyPosition::Top])?;
    Ok(())
}

fn restyle_table(tree: &mut DomTree, table: NodeId, class_name: &str) -> Result<(), TableError> {
    tree.set_class_name(table, class_name)?;
    tree.remove_attribute(table, "width")?;
    tree.set_attribute(table, "style", TABLE_STYLE)?;
    Ok(())
}

fn cell_contents(tree: &DomTree, cells: &[NodeId]) -> Vec<String> {
    cells.iter().map(|&cell| inner_html(tree, cell)).collect()
}

/// `<th>` contents of a row followed by its `<td>` contents
fn row_contents(tree: &DomTree, row: NodeId) -> Vec<String> {
    let mut contents = cell_contents(tree, &tree.get_elements_by_tag_name(row, "th"));
    contents.extend(cell_contents(tree, &tree.get_elements_by_tag_name(row, "td")));
    contents
}

/// Build the `<thead>`/`<tbody>` markup for a rebuilt table
///
/// `first_header_style` applies to the first header cell only;
/// `first_cell_style` to the first cell of every body row.
fn render_sections(
    headers: &[String],
    rows: &[Vec<String>],
    first_header_style: Option<&str>,
    first_cell_style: Option<&str>,
) -> String {
    let header_markup: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, content)| {
            let style = style_attr(first_header_style.filter(|_| i == 0));
            format!("      <th scope=\"col\"{style}>{content}</th>")
        })
        .collect();

    let mut markup = String::from("\n  <thead>\n    <tr>\n");
    markup.push_str(&header_markup.join("\n"));
    markup.push_str("\n    </tr>\n  </thead>\n  <tbody>");

    for row in rows {
        let cell_markup: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, content)| {
                let style = style_attr(first_cell_style.filter(|_| i == 0));
                format!("      <td class=\"{CELL_CLASS}\"{style}>{content}</td>")
            })
            .collect();
        markup.push_str("\n    <tr>\n");
        markup.push_str(&cell_markup.join("\n"));
        markup.push_str("\n    </tr>");
    }

    markup.push_str("\n  </tbody>\n  ");
    markup
}

fn style_attr(style: Option<&str>) -> String {
    style.map(|s| format!(" style=\"{s}\"")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftswap_html::{outer_html, parse};

    #[test]
    fn test_sticky_position_classes() {
        assert_eq!(StickyPosition::Left.class_name(), "sticky-left");
        assert_eq!(StickyPosition::Top.as_str(), "top");
    }

    #[test]
    fn test_wrap_table_sets_class_then_style() {
        let mut doc = parse("<table></table>");
        let table = doc.tree().get_elements_by_tag_name(doc.tree().root(), "table")[0];
        let tree = doc.tree_mut();

        let wrapper = wrap_table(tree, table, &[StickyPosition::Left, StickyPosition::Top])
            .unwrap()
            .unwrap();
        assert_eq!(
            outer_html(tree, wrapper),
            r#"<div class="table-scroll sticky-left sticky-top" style="max-height:300px"><table></table></div>"#
        );
    }

    #[test]
    fn test_wrap_detached_table_is_noop() {
        let mut tree = DomTree::new();
        let table = tree.create_element("table");
        assert_eq!(wrap_table(&mut tree, table, &[StickyPosition::Top]).unwrap(), None);
        assert_eq!(tree.parent(table), None);
    }

    #[test]
    fn test_render_sections_layout() {
        let markup = render_sections(
            &["A".to_string(), "B".to_string()],
            &[vec!["1".to_string(), "2".to_string()]],
            None,
            None,
        );
        assert_eq!(
            markup,
            "\n  <thead>\n    <tr>\n      <th scope=\"col\">A</th>\n      <th scope=\"col\">B</th>\n    </tr>\n  </thead>\n  <tbody>\n    <tr>\n      <td class=\"text-nowrap text-mono\">1</td>\n      <td class=\"text-nowrap text-mono\">2</td>\n    </tr>\n  </tbody>\n  "
        );
    }

    #[test]
    fn test_render_sections_first_cell_styles() {
        let markup = render_sections(
            &["H".to_string(), "I".to_string()],
            &[vec!["r".to_string(), "v".to_string()]],
            Some(FIRST_HEADER_STYLE),
            Some(FIRST_CELL_STYLE),
        );
        assert!(markup.contains(r#"<th scope="col" style="width:140px">H</th>"#));
        assert!(markup.contains(r#"<th scope="col">I</th>"#));
        assert!(markup.contains(
            r#"<td class="text-nowrap text-mono" style="background-color:#DE4407; color:#ffffff;">r</td>"#
        ));
        assert!(markup.contains(r#"<td class="text-nowrap text-mono">v</td>"#));
    }

    #[test]
    fn test_render_sections_empty() {
        assert_eq!(
            render_sections(&[], &[], None, None),
            "\n  <thead>\n    <tr>\n\n    </tr>\n  </thead>\n  <tbody>\n  </tbody>\n  "
        );
    }

    #[test]
    fn test_sticky_left_restyles_cells() {
        let mut doc = parse(
            r#"<table width="500" style="border-collapse: collapse;"><tr><th style="x">A</th><td style="y">1</td></tr></table>"#,
        );
        let table = doc.tree().get_elements_by_tag_name(doc.tree().root(), "table")[0];
        let tree = doc.tree_mut();
        transform_sticky_left(tree, table).unwrap();

        let wrapper = tree.parent(table).unwrap();
        assert_eq!(
            outer_html(tree, wrapper),
            concat!(
                r#"<div class="table-scroll sticky-left" style="max-height:300px">"#,
                r#"<table style="min-width:600px; width:100%" class="table"><tbody><tr>"#,
                r#"<th class="text-nowrap text-mono" scope="row">A</th>"#,
                r#"<td class="text-nowrap text-mono">1</td>"#,
                r#"</tr></tbody></table></div>"#
            )
        );
    }
}
