//! Handing placement records to a page back end.
//!
//! The layout core never touches a drawing document. Whatever does
//! implements [`PageAssembler`]; [`assemble`] feeds it one object's records
//! in order and asks for a single recompute afterwards, so back ends whose
//! positioning is last-write-wins see the records exactly as produced.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::types::ViewPlacementRecord;

/// A consumer of placement records, typically a CAD drawing page.
pub trait PageAssembler {
    /// Error reported by the back end.
    type Error;

    /// Create and register one view belonging to `group`.
    fn add_view(&mut self, group: &str, record: &ViewPlacementRecord) -> Result<(), Self::Error>;

    /// Recompute the document after a group has been added.
    fn recompute(&mut self) -> Result<(), Self::Error>;
}

/// Apply one object's records as a unit: every view in order, then one recompute.
pub fn assemble<A: PageAssembler>(
    assembler: &mut A,
    group: &str,
    records: &[ViewPlacementRecord],
) -> Result<(), A::Error> {
    for record in records {
        assembler.add_view(group, record)?;
    }
    assembler.recompute()
}

/// One object's views on a [`SheetPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedGroup {
    /// Group name (part title or symbol name).
    pub title: String,
    /// Views in the order they were added.
    pub views: Vec<ViewPlacementRecord>,
}

/// In-memory page: records every group and view it is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetPlan {
    /// Page height the records were computed against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_height: Option<f64>,
    /// Groups in the order they were added.
    pub groups: Vec<PlacedGroup>,
    /// Number of recomputes requested.
    #[serde(skip)]
    pub recomputes: usize,
}

impl SheetPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// All views on the sheet, in order.
    pub fn views(&self) -> impl Iterator<Item = &ViewPlacementRecord> {
        self.groups.iter().flat_map(|g| g.views.iter())
    }

    /// Total number of views.
    pub fn num_views(&self) -> usize {
        self.groups.iter().map(|g| g.views.len()).sum()
    }

    /// Find a group by title.
    pub fn group(&self, title: &str) -> Option<&PlacedGroup> {
        self.groups.iter().find(|g| g.title == title)
    }
}

impl PageAssembler for SheetPlan {
    type Error = Infallible;

    fn add_view(&mut self, group: &str, record: &ViewPlacementRecord) -> Result<(), Infallible> {
        match self.groups.last_mut() {
            Some(last) if last.title == group => last.views.push(record.clone()),
            _ => self.groups.push(PlacedGroup {
                title: group.to_string(),
                views: vec![record.clone()],
            }),
        }
        Ok(())
    }

    fn recompute(&mut self) -> Result<(), Infallible> {
        self.recomputes += 1;
        Ok(())
    }
}
