//! Preferences list projection and mutation service

use crate::error::{PrefsError, PrefsResult};
use crate::traits::{PreferencesDelegate, StructuralChangeSink};
use crate::types::{
    DnsSettings, IndexPath, Item, PreferencesModel, Section, StructuralChange,
};
use crate::validator;

/// List projection engine over the preferences model
///
/// Exclusive owner of the model. Reads derive the projected item list on
/// demand, so it can never drift from the model; writes go through the
/// mutation operations below, each of which reports the minimal structural
/// delta through the injected sink and, when persisted-relevant state
/// changed, hands the new snapshot to the delegate. All emissions happen
/// synchronously before the mutation returns.
pub struct PreferencesService {
    sections: Vec<Section>,
    model: PreferencesModel,
    is_editing: bool,
    /// Whether any in-place entry edit happened since edit mode began;
    /// those defer their delegate notification to the edit-mode exit.
    entry_edits_pending: bool,
}

impl PreferencesService {
    /// Create the service from a persisted snapshot. Done once per session.
    #[must_use]
    pub fn new(settings: &DnsSettings) -> Self {
        Self {
            sections: Section::all().to_vec(),
            model: PreferencesModel::from_settings(settings),
            is_editing: false,
            entry_edits_pending: false,
        }
    }

    /// Current model snapshot; external callers never get a live handle.
    #[must_use]
    pub fn model(&self) -> &PreferencesModel {
        &self.model
    }

    /// Whether the custom DNS list is in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    // ===== Projection =====

    /// Number of top-level sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Sections in presentation order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Ordered items of one section, derived from the current model.
    ///
    /// The trailing add-entry row exists only while the list is in edit
    /// mode, so `CustomDns` always projects to
    /// `domains + 1 + (editing ? 1 : 0)` rows.
    #[must_use]
    pub fn items_for(&self, section: Section) -> Vec<Item> {
        match section {
            Section::ManagedDns => vec![Item::BlockAdvertising, Item::BlockTracking],
            Section::CustomDns => {
                let mut items = Vec::with_capacity(self.model.custom_dns_domains.len() + 2);
                items.push(Item::UseCustomDns);
                items.extend((0..self.model.custom_dns_domains.len()).map(Item::DnsEntry));
                if self.is_editing {
                    items.push(Item::AddDnsEntry);
                }
                items
            }
        }
    }

    /// Number of rows currently projected for a section.
    #[must_use]
    pub fn row_count(&self, section: Section) -> usize {
        self.items_for(section).len()
    }

    // ===== Address mapping =====

    /// Bounds-checked item lookup. Out-of-range addresses resolve to
    /// `None`: callers must tolerate stale paths across structural changes.
    #[must_use]
    pub fn item_at(&self, index_path: IndexPath) -> Option<Item> {
        let section = self.sections.get(index_path.section)?;
        self.items_for(*section).get(index_path.row).copied()
    }

    /// First position of an item within a section, `None` if the section
    /// no longer contains it.
    #[must_use]
    pub fn index_path_of(&self, item: Item, section: Section) -> Option<IndexPath> {
        let section_index = self.sections.iter().position(|s| *s == section)?;
        let row = self.items_for(section).iter().position(|i| *i == item)?;
        Some(IndexPath::new(section_index, row))
    }

    // ===== Presentation predicates =====

    /// Whether a row accepts delete/insert/reorder affordances. Only the
    /// editable list rows, and only while in edit mode.
    #[must_use]
    pub fn can_edit(&self, item: Item) -> bool {
        self.is_editing && matches!(item, Item::DnsEntry(_) | Item::AddDnsEntry)
    }

    /// Indentation of a row relative to its section header. Entry rows sit
    /// one level deep outside edit mode; in edit mode all rows are flush to
    /// make room for the reorder and delete controls.
    #[must_use]
    pub fn indentation_level(&self, item: Item) -> usize {
        if matches!(item, Item::DnsEntry(_)) && !self.is_editing {
            1
        } else {
            0
        }
    }

    /// Whether the section's explanatory footer currently has extent. The
    /// custom DNS footer shows only while blocking keeps the toggle
    /// infeasible; the managed section never has one.
    #[must_use]
    pub fn footer_visible(&self, section: Section) -> bool {
        match section {
            Section::ManagedDns => false,
            Section::CustomDns => !self.model.can_enable_custom_dns(),
        }
    }

    // ===== Edit mode =====

    /// Enter or leave list-edit mode. No-op when unchanged.
    ///
    /// Leaving edit mode is the commit boundary for in-place edits: every
    /// entry is reparsed, survivors are canonicalized and anything still
    /// unparsable is dropped. The sink gets a full refresh either way since
    /// the row distribution changes shape; the delegate is notified when
    /// in-place edits or the cleanup changed the list since edit mode
    /// began.
    pub fn set_editing(
        &mut self,
        editing: bool,
        sink: &mut dyn StructuralChangeSink,
        delegate: &mut dyn PreferencesDelegate,
    ) {
        if self.is_editing == editing {
            return;
        }

        self.is_editing = editing;

        let mut domains_changed = false;
        if !editing {
            let cleaned: Vec<String> = self
                .model
                .custom_dns_domains
                .iter()
                .filter_map(|domain| validator::canonicalize_ip_address(domain))
                .collect();

            if cleaned != self.model.custom_dns_domains {
                log::debug!(
                    "dropped {} invalid custom DNS entries on edit-mode exit",
                    self.model.custom_dns_domains.len() - cleaned.len()
                );
                self.model.custom_dns_domains = cleaned;
                domains_changed = true;
            }

            // A valid-to-valid rewrite survives cleanup unchanged but still
            // has to reach the delegate; the pending flag carries it here.
            domains_changed |= self.entry_edits_pending;
        }
        self.entry_edits_pending = false;

        sink.refresh_all();

        if domains_changed {
            delegate.preferences_changed(&self.model.to_settings());
        }
    }

    // ===== Mutations =====

    /// Toggle ad blocking.
    pub fn set_block_advertising(
        &mut self,
        enabled: bool,
        sink: &mut dyn StructuralChangeSink,
        delegate: &mut dyn PreferencesDelegate,
    ) {
        self.set_flag(sink, delegate, |model| model.block_advertising = enabled);
    }

    /// Toggle tracker blocking.
    pub fn set_block_tracking(
        &mut self,
        enabled: bool,
        sink: &mut dyn StructuralChangeSink,
        delegate: &mut dyn PreferencesDelegate,
    ) {
        self.set_flag(sink, delegate, |model| model.block_tracking = enabled);
    }

    /// Toggle the custom DNS switch. Cannot affect toggle feasibility, so
    /// this never produces structural changes.
    pub fn set_enable_custom_dns(
        &mut self,
        enabled: bool,
        sink: &mut dyn StructuralChangeSink,
        delegate: &mut dyn PreferencesDelegate,
    ) {
        self.set_flag(sink, delegate, |model| model.enable_custom_dns = enabled);
    }

    /// Shared flag path: apply the change, reload the custom DNS toggle row
    /// and footer iff feasibility flipped, then notify the delegate.
    fn set_flag(
        &mut self,
        sink: &mut dyn StructuralChangeSink,
        delegate: &mut dyn PreferencesDelegate,
        apply: impl FnOnce(&mut PreferencesModel),
    ) {
        let could_enable = self.model.can_enable_custom_dns();

        apply(&mut self.model);

        if could_enable != self.model.can_enable_custom_dns() {
            if let Some(path) = self.index_path_of(Item::UseCustomDns, Section::CustomDns) {
                sink.apply_change(StructuralChange::ReloadRow(path));
            }
            sink.apply_change(StructuralChange::ReloadFooter(Section::CustomDns.index()));
        }

        delegate.preferences_changed(&self.model.to_settings());
    }

    /// Store new text of the pending entry row and report its
    /// presentational validity. Never a structural or persisted change.
    pub fn update_pending_entry_text(&mut self, text: String, sink: &mut dyn StructuralChangeSink) {
        let is_valid = PreferencesModel::is_valid_for_presentation(&text);
        self.model.pending_entry_text = text;
        sink.entry_validity_changed(Item::AddDnsEntry, is_valid);
    }

    /// Validate and promote the pending entry text into the domain list.
    ///
    /// On success the canonical form is appended, the buffer cleared, an
    /// insert is emitted immediately before the still-present add-entry row
    /// and a scroll hint targets that row. On failure the row is flagged
    /// invalid and the model is untouched. An empty buffer never commits
    /// but is not flagged either, matching its presentational validity.
    /// Returns whether a commit happened.
    pub fn commit_pending_entry(
        &mut self,
        sink: &mut dyn StructuralChangeSink,
        delegate: &mut dyn PreferencesDelegate,
    ) -> bool {
        if self.model.pending_entry_text.is_empty() {
            return false;
        }

        let Some(address) = validator::parse_ip_address(&self.model.pending_entry_text) else {
            sink.entry_validity_changed(Item::AddDnsEntry, false);
            return false;
        };

        let new_index = self.model.custom_dns_domains.len();
        self.model.custom_dns_domains.push(address.to_string());
        self.model.pending_entry_text.clear();
        log::debug!("committed custom DNS server {address} at index {new_index}");

        sink.entry_validity_changed(Item::AddDnsEntry, true);

        if let Some(path) = self.index_path_of(Item::DnsEntry(new_index), Section::CustomDns) {
            sink.apply_change(StructuralChange::InsertRow(path));
        }
        if let Some(path) = self.index_path_of(Item::AddDnsEntry, Section::CustomDns) {
            sink.scroll_to_row(path);
        }

        delegate.preferences_changed(&self.model.to_settings());
        true
    }

    /// Overwrite an existing entry with raw text while it is under edit.
    /// Outside edit mode rows are not editable, so the call is a no-op:
    /// transiently invalid text is only allowed when a cleanup boundary is
    /// still ahead.
    ///
    /// No parse gate on keystrokes: invalid text persists transiently until
    /// edit mode ends. The delegate is deliberately not notified here —
    /// in-place edits reach it at the edit-mode-exit commit boundary.
    pub fn update_entry_text(
        &mut self,
        index: usize,
        text: String,
        sink: &mut dyn StructuralChangeSink,
    ) -> PrefsResult<()> {
        if !self.is_editing {
            return Ok(());
        }

        let len = self.model.custom_dns_domains.len();
        let entry = self
            .model
            .custom_dns_domains
            .get_mut(index)
            .ok_or(PrefsError::IndexOutOfRange { index, len })?;

        let is_valid = PreferencesModel::is_valid_for_presentation(&text);
        *entry = text;
        self.entry_edits_pending = true;
        sink.entry_validity_changed(Item::DnsEntry(index), is_valid);
        Ok(())
    }

    /// Remove an entry. Outside edit mode there is no delete affordance,
    /// so the call is a no-op.
    pub fn delete_entry(
        &mut self,
        index: usize,
        sink: &mut dyn StructuralChangeSink,
        delegate: &mut dyn PreferencesDelegate,
    ) -> PrefsResult<()> {
        if !self.is_editing {
            return Ok(());
        }

        let len = self.model.custom_dns_domains.len();
        if index >= len {
            return Err(PrefsError::IndexOutOfRange { index, len });
        }

        // Resolve the row before the removal shifts every later entry.
        let path = self.index_path_of(Item::DnsEntry(index), Section::CustomDns);
        let removed = self.model.custom_dns_domains.remove(index);
        log::debug!("deleted custom DNS server {removed} at index {index}");

        if let Some(path) = path {
            sink.apply_change(StructuralChange::DeleteRow(path));
        }

        delegate.preferences_changed(&self.model.to_settings());
        Ok(())
    }

    /// Reposition an entry by swapping source and destination, matching a
    /// drag gesture. The destination is clamped into `[0, len - 1]`; the
    /// presentation has already moved the row during the drag, so no
    /// structural change is emitted. No-op outside edit mode.
    pub fn move_entry(
        &mut self,
        from: usize,
        to: usize,
        delegate: &mut dyn PreferencesDelegate,
    ) -> PrefsResult<()> {
        if !self.is_editing {
            return Ok(());
        }

        let len = self.model.custom_dns_domains.len();
        if from >= len {
            return Err(PrefsError::IndexOutOfRange { index: from, len });
        }

        let to = to.min(len - 1);
        if from != to {
            self.model.custom_dns_domains.swap(from, to);
            delegate.preferences_changed(&self.model.to_settings());
        }
        Ok(())
    }

    /// Constrain a proposed drag destination to the contiguous run of
    /// entry rows. A destination in an earlier section snaps to the first
    /// entry row, a later section to the last; within the section the row
    /// is clamped to the run. Reordering never escapes its section.
    #[must_use]
    pub fn clamped_move_destination(&self, source: IndexPath, proposed: IndexPath) -> IndexPath {
        if !matches!(self.item_at(source), Some(Item::DnsEntry(_))) {
            return source;
        }

        let items = self.items_for(Section::CustomDns);
        let first = items.iter().position(|i| matches!(i, Item::DnsEntry(_)));
        let last = items.iter().rposition(|i| matches!(i, Item::DnsEntry(_)));
        let (Some(first), Some(last)) = (first, last) else {
            return source;
        };

        if proposed.section < source.section {
            IndexPath::new(source.section, first)
        } else if proposed.section > source.section {
            IndexPath::new(source.section, last)
        } else {
            IndexPath::new(source.section, proposed.row.clamp(first, last))
        }
    }
}
