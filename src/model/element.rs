//! The value type that flows through a trace

use std::fmt;

/// Stable identity of an element, assigned once by the array factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element-{}", self.0)
    }
}

/// One bar of the visualized array.
///
/// The `id` travels with the value through every swap and merge write so a
/// renderer can follow an element as it changes position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    value: u32,
    id: ElementId,
}

impl Element {
    pub fn new(value: u32, id: ElementId) -> Self {
        Element { value, id }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn id(&self) -> ElementId {
        self.id
    }
}

/// Build elements from raw values, numbering ids from zero.
///
/// Handy for tests and fixed demo inputs; interactive arrays come from
/// [`ArrayFactory`](crate::factory::ArrayFactory).
pub fn elements_from_values(values: &[u32]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| Element::new(value, ElementId(idx as u64)))
        .collect()
}
