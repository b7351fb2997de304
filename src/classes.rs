/// Build a `class` attribute value: base classes, then modifiers, then the
/// caller's custom classes. No deduplication is performed.
pub fn build(base: &[&str], modifiers: &[&str], custom: Option<&str>) -> String {
    let mut list = ClassList::empty();
    for class in base {
        list = list.base(class);
    }
    for class in modifiers {
        list = list.modifier(class);
    }
    list.custom(custom).build()
}

/// Ordered class list builder.
///
/// Whatever order the calls are made in, `build` emits base classes first,
/// then modifiers, then custom classes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassList {
    base: Vec<String>,
    modifiers: Vec<String>,
    custom: Vec<String>,
}

impl ClassList {
    pub fn new(base: &str) -> Self {
        Self::empty().base(base)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn base(mut self, class: &str) -> Self {
        push_nonblank(&mut self.base, class);
        self
    }

    pub fn modifier(mut self, class: &str) -> Self {
        push_nonblank(&mut self.modifiers, class);
        self
    }

    pub fn modifier_if(self, condition: bool, class: &str) -> Self {
        if condition {
            self.modifier(class)
        } else {
            self
        }
    }

    pub fn custom(mut self, classes: Option<&str>) -> Self {
        if let Some(classes) = classes {
            push_nonblank(&mut self.custom, classes);
        }
        self
    }

    pub fn build(&self) -> String {
        self.base
            .iter()
            .chain(&self.modifiers)
            .chain(&self.custom)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn push_nonblank(list: &mut Vec<String>, class: &str) {
    let class = class.trim();
    if !class.is_empty() {
        list.push(class.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_base_modifiers_custom() {
        let classes = ClassList::new("govuk-button")
            .custom(Some("app-button"))
            .modifier("govuk-button--start");
        assert_eq!(classes.build(), "govuk-button govuk-button--start app-button");
    }

    #[test]
    fn no_deduplication() {
        assert_eq!(
            build(&["govuk-tag"], &[], Some("govuk-tag")),
            "govuk-tag govuk-tag"
        );
    }

    #[test]
    fn blank_custom_is_ignored() {
        assert_eq!(build(&["govuk-hint"], &[], Some("  ")), "govuk-hint");
        assert_eq!(build(&["govuk-hint"], &[], None), "govuk-hint");
    }

    #[test]
    fn conditional_modifiers() {
        let classes = ClassList::new("govuk-input")
            .modifier_if(false, "govuk-input--error")
            .modifier_if(true, "govuk-input--width-2");
        assert_eq!(classes.build(), "govuk-input govuk-input--width-2");
    }
}
