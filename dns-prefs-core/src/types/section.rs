//! Section and item taxonomy for the projected list
//!
//! Presentation addressing only; none of these types are persisted. Rows
//! are addressed by `(section, row)` index paths, logical rows by [`Item`].

/// Top-level grouping of rows, fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Built-in resolver toggles (ad and tracker blocking)
    ManagedDns,
    /// Custom DNS toggle plus the editable server list
    CustomDns,
}

impl Section {
    /// All sections in presentation order
    #[must_use]
    pub fn all() -> &'static [Section] {
        &[Section::ManagedDns, Section::CustomDns]
    }

    /// Position of this section in presentation order
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::ManagedDns => 0,
            Section::CustomDns => 1,
        }
    }

    /// Section at the given position
    #[must_use]
    pub fn from_index(index: usize) -> Option<Section> {
        match index {
            0 => Some(Section::ManagedDns),
            1 => Some(Section::CustomDns),
            _ => None,
        }
    }
}

/// Addressable logical row, independent of its visual representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    BlockAdvertising,
    BlockTracking,
    UseCustomDns,
    /// Trailing input row, present only while the list is in edit mode
    AddDnsEntry,
    /// Zero-based position into the custom DNS domain list
    DnsEntry(usize),
}

impl Item {
    /// Editing control kind a row presents: entry rows delete, the add row
    /// inserts, everything else shows none.
    #[must_use]
    pub fn edit_affordance(self) -> EditAffordance {
        match self {
            Item::DnsEntry(_) => EditAffordance::Delete,
            Item::AddDnsEntry => EditAffordance::Insert,
            _ => EditAffordance::None,
        }
    }
}

/// Two-level row address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    #[must_use]
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Incremental UI delta emitted by a mutation, to be applied as one
/// batched update per mutation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralChange {
    InsertRow(IndexPath),
    DeleteRow(IndexPath),
    ReloadRow(IndexPath),
    /// Footer visibility of the given section changed extent
    ReloadFooter(usize),
}

/// Editing control a row presents while the list is in edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditAffordance {
    #[default]
    None,
    Delete,
    Insert,
}
