use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::components::Component;
use crate::config::Config;
use crate::html::{Element, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    Numeric,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableCell {
    #[serde(deserialize_with = "crate::scalar::option", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<CellFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colspan: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rowspan: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl TableCell {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn render(&self, tag: &'static str, base: &str, scope: Option<&str>) -> Markup {
        let numeric = self.format == Some(CellFormat::Numeric);
        Element::new(tag)
            .attr_opt("scope", scope)
            .class(
                ClassList::new(base)
                    .modifier_if(numeric, &format!("{}--numeric", base))
                    .custom(self.classes.as_deref()),
            )
            .attr_opt("colspan", self.colspan)
            .attr_opt("rowspan", self.rowspan)
            .attributes(self.attributes.as_ref())
            .child_opt(Markup::from_content(self.text.as_deref(), self.html.as_deref()))
            .render()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Vec<TableCell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<TableCell>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_cell_is_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

crate::impl_merge!(TableOptions {
    replace: [caption, caption_classes, head, rows, first_cell_is_header, classes],
    nested: [attributes],
});

impl Component for TableOptions {
    fn render_with(&self, _config: &Config) -> Markup {
        let caption = self.caption.as_deref().map(|caption| {
            Element::new("caption")
                .class(ClassList::new("govuk-table__caption").custom(self.caption_classes.as_deref()))
                .text(caption)
                .render()
        });

        let head = self.head.as_ref().map(|cells| {
            let row: Markup = cells
                .iter()
                .map(|cell| cell.render("th", "govuk-table__header", Some("col")))
                .collect();
            Element::new("thead")
                .attr("class", "govuk-table__head")
                .child(Element::new("tr").attr("class", "govuk-table__row").child(row).render())
                .render()
        });

        let first_is_header = self.first_cell_is_header.unwrap_or(false);
        let rows: Markup = self
            .rows
            .iter()
            .flatten()
            .map(|row| {
                let cells: Markup = row
                    .iter()
                    .enumerate()
                    .map(|(index, cell)| {
                        if index == 0 && first_is_header {
                            cell.render("th", "govuk-table__header", Some("row"))
                        } else {
                            cell.render("td", "govuk-table__cell", None)
                        }
                    })
                    .collect();
                Element::new("tr").attr("class", "govuk-table__row").child(cells).render()
            })
            .collect();

        Element::new("table")
            .class(ClassList::new("govuk-table").custom(self.classes.as_deref()))
            .attributes(self.attributes.as_ref())
            .child_opt(caption)
            .child_opt(head)
            .child(Element::new("tbody").attr("class", "govuk-table__body").child(rows).render())
            .render()
    }
}
