//! Built-in rule sets

use super::{RuleCategory, RuleError, RuleSet, TransformationRule};
use crate::tables::try_transform_tables;

/// All built-in rule sets, in listing order
pub fn builtin_rule_sets() -> Result<Vec<RuleSet>, RuleError> {
    Ok(vec![
        table_rule_set(),
        react_rule_set()?,
        vue_rule_set()?,
        angular_rule_set()?,
        web_components_rule_set()?,
    ])
}

fn table_rule_set() -> RuleSet {
    RuleSet {
        id: "table",
        display_name: "Table Transfer",
        description: "Convert legacy tables to sticky scrolling tables",
        icon: "📊",
        rules: vec![TransformationRule::markup(
            "sticky-tables",
            "Sticky tables",
            "Restructure styled tables into sticky-top, sticky-left and sticky-both layouts",
            RuleCategory::Tag,
            |input| Ok(try_transform_tables(input)?),
        )],
    }
}

fn react_rule_set() -> Result<RuleSet, RuleError> {
    use RuleCategory::{Attribute, Comment, Tag};

    Ok(RuleSet {
        id: "react",
        display_name: "React/JSX",
        description: "Convert HTML to React JSX syntax",
        icon: "⚛️",
        rules: vec![
            TransformationRule::replace(
                "class-name",
                "className",
                "Convert class to className for React",
                Attribute,
                r#"class=""#,
                r#"className=""#,
            )?,
            TransformationRule::replace(
                "html-for",
                "htmlFor",
                "Convert for to htmlFor for React",
                Attribute,
                r#"for=""#,
                r#"htmlFor=""#,
            )?,
            TransformationRule::replace(
                "jsx-comments",
                "JSX comments",
                "Convert HTML comments to JSX comments",
                Comment,
                r"<!--\s*(.+?)\s*-->",
                "{/* ${1} */}",
            )?,
            TransformationRule::replace(
                "self-closing-br",
                "Self-closing br",
                "Convert br tags to self-closing",
                Tag,
                "<br>",
                "<br />",
            )?,
            TransformationRule::replace(
                "self-closing-hr",
                "Self-closing hr",
                "Convert hr tags to self-closing",
                Tag,
                "<hr>",
                "<hr />",
            )?,
            TransformationRule::replace(
                "self-closing-img",
                "Self-closing img",
                "Convert img tags to self-closing",
                Tag,
                "<img([^>]+)>",
                "<img${1} />",
            )?,
            TransformationRule::kebab_to_camel(
                "camel-case-attributes",
                "camelCase attributes",
                "Convert kebab-case attributes to camelCase",
                r#"([0-9A-Za-z_]+)-([0-9A-Za-z_]+)=""#,
            )?,
        ],
    })
}

fn vue_rule_set() -> Result<RuleSet, RuleError> {
    use RuleCategory::Attribute;

    Ok(RuleSet {
        id: "vue",
        display_name: "Vue.js",
        description: "Convert HTML to Vue.js template syntax",
        icon: "🟢",
        rules: vec![
            TransformationRule::replace(
                "class-binding",
                ":class",
                "Convert class to Vue dynamic class binding",
                Attribute,
                r#"class=""#,
                r#":class=""#,
            )?,
            TransformationRule::replace(
                "click-event",
                "@click",
                "Convert onclick to Vue click event",
                Attribute,
                r#"onclick=""#,
                r#"@click=""#,
            )?,
            TransformationRule::replace(
                "change-event",
                "@change",
                "Convert onchange to Vue change event",
                Attribute,
                r#"onchange=""#,
                r#"@change=""#,
            )?,
            TransformationRule::replace(
                "input-event",
                "@input",
                "Convert oninput to Vue input event",
                Attribute,
                r#"oninput=""#,
                r#"@input=""#,
            )?,
            TransformationRule::replace(
                "style-binding",
                ":style",
                "Convert style to Vue dynamic style binding",
                Attribute,
                r#"style=""#,
                r#":style=""#,
            )?,
            TransformationRule::replace(
                "v-bind-shorthand",
                "v-bind shorthand",
                "Shorthand v-bind syntax",
                Attribute,
                r#"v-bind:([0-9A-Za-z_]+)=""#,
                ":${1}=\"",
            )?,
            TransformationRule::replace(
                "v-on-shorthand",
                "v-on shorthand",
                "Shorthand v-on syntax",
                Attribute,
                r#"v-on:([0-9A-Za-z_]+)=""#,
                "@${1}=\"",
            )?,
        ],
    })
}

fn angular_rule_set() -> Result<RuleSet, RuleError> {
    use RuleCategory::Attribute;

    Ok(RuleSet {
        id: "angular",
        display_name: "Angular",
        description: "Convert HTML to Angular template syntax",
        icon: "🅰️",
        rules: vec![
            TransformationRule::replace(
                "class-binding",
                "[class]",
                "Convert class to Angular property binding",
                Attribute,
                r#"class=""#,
                r#"[class]=""#,
            )?,
            TransformationRule::replace(
                "click-event",
                "(click)",
                "Convert onclick to Angular click event",
                Attribute,
                r#"onclick=""#,
                r#"(click)=""#,
            )?,
            TransformationRule::replace(
                "change-event",
                "(change)",
                "Convert onchange to Angular change event",
                Attribute,
                r#"onchange=""#,
                r#"(change)=""#,
            )?,
            TransformationRule::replace(
                "input-event",
                "(input)",
                "Convert oninput to Angular input event",
                Attribute,
                r#"oninput=""#,
                r#"(input)=""#,
            )?,
            TransformationRule::replace(
                "value-binding",
                "[value]",
                "Convert value to Angular property binding",
                Attribute,
                r#"value=""#,
                r#"[value]=""#,
            )?,
            TransformationRule::replace(
                "disabled-binding",
                "[disabled]",
                "Convert disabled to Angular property binding",
                Attribute,
                r#"disabled=""#,
                r#"[disabled]=""#,
            )?,
            TransformationRule::replace(
                "hidden-binding",
                "[hidden]",
                "Convert hidden to Angular property binding",
                Attribute,
                r#"hidden=""#,
                r#"[hidden]=""#,
            )?,
        ],
    })
}

fn web_components_rule_set() -> Result<RuleSet, RuleError> {
    use RuleCategory::{Attribute, Tag};

    Ok(RuleSet {
        id: "webcomponents",
        display_name: "Web Components",
        description: "Convert HTML for Web Components",
        icon: "🧩",
        rules: vec![
            TransformationRule::replace(
                "click-event",
                "@click",
                "Convert onclick to custom element event",
                Attribute,
                r#"onclick=""#,
                r#"@click=""#,
            )?,
            TransformationRule::replace(
                "change-event",
                "@change",
                "Convert onchange to custom element event",
                Attribute,
                r#"onchange=""#,
                r#"@change=""#,
            )?,
            TransformationRule::replace(
                "class-attribute",
                "class",
                "Maintain standard class attribute",
                Attribute,
                r#"class=""#,
                r#"class=""#,
            )?,
            TransformationRule::replace(
                "custom-element-tags",
                "Custom elements",
                "Custom element tags (no changes needed)",
                Tag,
                "<([0-9A-Za-z_]+-[0-9A-Za-z_]+)([^>]*)>",
                "<${1}${2}>",
            )?,
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rule_sets_compile() {
        let sets = builtin_rule_sets().unwrap();
        let ids: Vec<_> = sets.iter().map(|set| set.id).collect();
        assert_eq!(ids, ["table", "react", "vue", "angular", "webcomponents"]);
        assert_eq!(sets[1].rules.len(), 7);
        assert_eq!(sets[2].rules.len(), 7);
        assert_eq!(sets[3].rules.len(), 7);
        assert_eq!(sets[4].rules.len(), 4);
    }

    #[test]
    fn test_rule_ids_unique_within_set() {
        for set in builtin_rule_sets().unwrap() {
            let mut ids: Vec<_> = set.rules.iter().map(|rule| rule.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), set.rules.len(), "duplicate rule id in {}", set.id);
        }
    }

    #[test]
    fn test_react_comment_rule() {
        let sets = builtin_rule_sets().unwrap();
        let comment = &sets[1].rules[2];
        assert_eq!(comment.apply("<!--   note here  -->").unwrap(), "{/* note here */}");
    }

    #[test]
    fn test_identity_rules_leave_text_unchanged() {
        let sets = builtin_rule_sets().unwrap();
        let input = r#"<my-card class="x" data-a="1"></my-card>"#;
        assert_eq!(sets[4].rules[2].apply(input).unwrap(), input);
        assert_eq!(sets[4].rules[3].apply(input).unwrap(), input);
    }
}
