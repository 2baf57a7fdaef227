//! The Org-mode node table.

use crate::schema::{NodeSpec, Schema};

/// Every typed node of the Org syntax tree.
pub fn schema() -> Schema {
    Schema::new(vec![
        // ── Document structure ─────────────────────────────────────────
        NodeSpec::new("Document", ["DOCUMENT"])
            .first_child("section", "Section")
            .first_child("first_headline", "Headline")
            .last_child("last_headline", "Headline")
            .children("headlines", "Headline")
            .pre_blank(),
        NodeSpec::new("Section", ["SECTION"]).post_blank(),
        NodeSpec::new("Paragraph", ["PARAGRAPH"]).post_blank(),
        // ── Headlines ──────────────────────────────────────────────────
        NodeSpec::new("Headline", ["HEADLINE"])
            .first_child("title", "HeadlineTitle")
            .first_child("section", "Section")
            .first_child("tags", "HeadlineTags")
            .first_child("planning", "Planning")
            .first_child("priority", "HeadlinePriority")
            .children("headlines", "Headline")
            .token("stars", "HEADLINE_STARS")
            .token("keyword", "HEADLINE_KEYWORD")
            .post_blank(),
        NodeSpec::new("HeadlineStars", ["HEADLINE_STARS"]).parent("headline", "Headline"),
        NodeSpec::new("HeadlineTitle", ["HEADLINE_TITLE"]).parent("headline", "Headline"),
        NodeSpec::new("HeadlineKeyword", ["HEADLINE_KEYWORD"]).parent("headline", "Headline"),
        NodeSpec::new("HeadlinePriority", ["HEADLINE_PRIORITY"])
            .parent("headline", "Headline")
            .token("text", "TEXT"),
        NodeSpec::new("HeadlineTags", ["HEADLINE_TAGS"]).parent("headline", "Headline"),
        // ── Drawers and planning ───────────────────────────────────────
        NodeSpec::new("PropertyDrawer", ["PROPERTY_DRAWER"])
            .children("node_properties", "NodeProperty"),
        NodeSpec::new("NodeProperty", ["NODE_PROPERTY"]),
        NodeSpec::new("Planning", ["PLANNING"])
            .last_child("deadline", "PlanningDeadline")
            .last_child("scheduled", "PlanningScheduled")
            .last_child("closed", "PlanningClosed"),
        NodeSpec::new("PlanningDeadline", ["PLANNING_DEADLINE"]),
        NodeSpec::new("PlanningScheduled", ["PLANNING_SCHEDULED"]),
        NodeSpec::new("PlanningClosed", ["PLANNING_CLOSED"]),
        // ── Tables ─────────────────────────────────────────────────────
        NodeSpec::new("OrgTable", ["ORG_TABLE"]).post_blank(),
        NodeSpec::new("OrgTableRow", ["ORG_TABLE_RULE_ROW", "ORG_TABLE_STANDARD_ROW"]),
        NodeSpec::new("OrgTableCell", ["ORG_TABLE_CELL"]),
        NodeSpec::new("TableEl", ["TABLE_EL"]).post_blank(),
        // ── Lists ──────────────────────────────────────────────────────
        NodeSpec::new("List", ["LIST"]).children("items", "ListItem"),
        NodeSpec::new("ListItem", ["LIST_ITEM"])
            .first_child("content", "ListItemContent")
            .token("indent", "LIST_ITEM_INDENT")
            .token("bullet", "LIST_ITEM_BULLET"),
        NodeSpec::new("ListItemIndent", ["LIST_ITEM_INDENT"]),
        NodeSpec::new("ListItemTag", ["LIST_ITEM_TAG"]),
        NodeSpec::new("ListItemBullet", ["LIST_ITEM_BULLET"]),
        NodeSpec::new("ListItemContent", ["LIST_ITEM_CONTENT"]),
        // ── Other elements ─────────────────────────────────────────────
        NodeSpec::new("Drawer", ["DRAWER"]),
        NodeSpec::new("DynBlock", ["DYN_BLOCK"]),
        NodeSpec::new("Keyword", ["KEYWORD"]),
        NodeSpec::new("BabelCall", ["BABEL_CALL"]),
        NodeSpec::new("Clock", ["CLOCK"]).post_blank(),
        NodeSpec::new("FnDef", ["FN_DEF"]).post_blank(),
        NodeSpec::new("Comment", ["COMMENT"]).token("text", "TEXT").post_blank(),
        NodeSpec::new("Rule", ["RULE"]).post_blank(),
        NodeSpec::new("FixedWidth", ["FIXED_WIDTH"]).token("text", "TEXT").post_blank(),
        NodeSpec::new("LatexEnvironment", ["LATEX_ENVIRONMENT"]),
        // ── Blocks ─────────────────────────────────────────────────────
        NodeSpec::new("SpecialBlock", ["SPECIAL_BLOCK"]),
        NodeSpec::new("QuoteBlock", ["QUOTE_BLOCK"]),
        NodeSpec::new("CenterBlock", ["CENTER_BLOCK"]),
        NodeSpec::new("VerseBlock", ["VERSE_BLOCK"]),
        NodeSpec::new("CommentBlock", ["COMMENT_BLOCK"]),
        NodeSpec::new("ExampleBlock", ["EXAMPLE_BLOCK"]),
        NodeSpec::new("ExportBlock", ["EXPORT_BLOCK"]),
        NodeSpec::new("SourceBlock", ["SOURCE_BLOCK"]),
        // ── Objects ────────────────────────────────────────────────────
        NodeSpec::new("InlineCall", ["INLINE_CALL"]),
        NodeSpec::new("InlineSrc", ["INLINE_SRC"]),
        NodeSpec::new("Link", ["LINK"]).token("path", "LINK_PATH"),
        NodeSpec::new("Cookie", ["COOKIE"]),
        NodeSpec::new("RadioTarget", ["RADIO_TARGET"]),
        NodeSpec::new("FnRef", ["FN_REF"]),
        NodeSpec::new("Macros", ["MACROS"]),
        NodeSpec::new("MacrosArgument", ["MACROS_ARGUMENT"]),
        NodeSpec::new("Snippet", ["SNIPPET"]).token("name", "TEXT"),
        NodeSpec::new("Target", ["TARGET"]),
        NodeSpec::new("Bold", ["BOLD"]),
        NodeSpec::new("Strike", ["STRIKE"]),
        NodeSpec::new("Italic", ["ITALIC"]),
        NodeSpec::new("Underline", ["UNDERLINE"]),
        NodeSpec::new("Verbatim", ["VERBATIM"]),
        NodeSpec::new("Code", ["CODE"]).token("text", "TEXT"),
        // ── Timestamps ─────────────────────────────────────────────────
        // A range holds two runs of the same token kinds: the start fields
        // come first, the end fields last.
        NodeSpec::new(
            "Timestamp",
            ["TIMESTAMP_ACTIVE", "TIMESTAMP_INACTIVE", "TIMESTAMP_DIARY"],
        )
        .token("year_start", "TIMESTAMP_YEAR")
        .token("month_start", "TIMESTAMP_MONTH")
        .token("day_start", "TIMESTAMP_DAY")
        .token("hour_start", "TIMESTAMP_HOUR")
        .token("minute_start", "TIMESTAMP_MINUTE")
        .last_token("year_end", "TIMESTAMP_YEAR")
        .last_token("month_end", "TIMESTAMP_MONTH")
        .last_token("day_end", "TIMESTAMP_DAY")
        .last_token("hour_end", "TIMESTAMP_HOUR")
        .last_token("minute_end", "TIMESTAMP_MINUTE"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenConfig;
    use crate::validate::validate;

    #[test]
    fn org_schema_is_valid() {
        assert_eq!(validate(&schema(), &GenConfig::default()), Ok(()));
    }

    #[test]
    fn every_kind_has_one_owner() {
        let schema = schema();
        let mut kinds: Vec<&str> = schema
            .nodes
            .iter()
            .flat_map(|node| node.kinds.iter().map(String::as_str))
            .collect();
        let total = kinds.len();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), total);
    }

    #[test]
    fn multi_kind_wrappers() {
        let schema = schema();
        assert_eq!(
            schema.node("OrgTableRow").map(|n| n.kinds.len()),
            Some(2)
        );
        assert_eq!(schema.node("Timestamp").map(|n| n.kinds.len()), Some(3));
    }
}
