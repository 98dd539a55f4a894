//! Selection protocol and merge resolution.
//!
//! Clicks on standalone cells toggle them in the selection; clicks on a merged
//! region select the whole region. Once a toggle leaves two or more cells
//! selected, [`MergeResolver::attempt_merge`] runs: the selection is completed
//! to its bounding rectangle and merged, unless that rectangle would cut
//! through or combine existing regions.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::MergeError;
use crate::model::GridModel;
use crate::types::{CellPos, CellRange, Region, RegionId, Selection};

/// Behavior switches for the click protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeOptions {
    /// Clicking a region that is already exactly the selection clears it.
    /// When false, the region is always (re)selected.
    pub toggle_region_selection: bool,
}

/// What a single click did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClickOutcome {
    /// A standalone cell was added to the selection.
    Selected { cell: CellPos },
    /// A standalone cell was removed from the selection.
    Deselected { cell: CellPos },
    /// The selection was replaced by all cells of a region.
    RegionSelected { region: RegionId },
    /// The region was already selected and the click cleared it.
    RegionDeselected { region: RegionId },
    /// The selection was merged into this region.
    Merged { region: Region },
}

/// Outcome of planning a merge before it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    /// Bounds of the resulting region
    pub bounds: CellRange,
    /// Region being grown, whose id the result keeps
    pub expands: Option<RegionId>,
}

/// Applies the click protocol to a [`GridModel`] and [`Selection`].
#[derive(Debug, Clone, Default)]
pub struct MergeResolver {
    options: MergeOptions,
    next_id: u64,
}

impl MergeResolver {
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            next_id: 0,
        }
    }

    pub fn options(&self) -> MergeOptions {
        self.options
    }

    pub fn set_options(&mut self, options: MergeOptions) {
        self.options = options;
    }

    /// Handle a click on `(row, col)`.
    ///
    /// # Errors
    /// `OutOfBounds` leaves everything untouched. `Conflicting` comes from an
    /// automatic merge attempt; the selection has been cleared and the model
    /// is unchanged.
    pub fn on_cell_click(
        &mut self,
        model: &mut GridModel,
        selection: &mut Selection,
        row: u32,
        col: u32,
    ) -> Result<ClickOutcome, MergeError> {
        let cell = CellPos::new(row, col);
        if !model.in_bounds(cell) {
            return Err(MergeError::OutOfBounds { row, col });
        }

        if let Some(region) = model.region_at(row, col) {
            let range = region.range();
            let id = region.id.clone();
            if self.options.toggle_region_selection && selection.equals_range(&range) {
                selection.clear();
                debug!("region {id} deselected");
                return Ok(ClickOutcome::RegionDeselected { region: id });
            }
            selection.select_range(&range);
            debug!("region {id} selected ({range})");
            return Ok(ClickOutcome::RegionSelected { region: id });
        }

        if !selection.toggle(cell) {
            debug!("cell {cell} deselected");
            return Ok(ClickOutcome::Deselected { cell });
        }
        debug!("cell {cell} selected, {} in selection", selection.len());

        if selection.len() >= 2 {
            let region = self.attempt_merge(selection, model)?;
            return Ok(ClickOutcome::Merged { region });
        }
        Ok(ClickOutcome::Selected { cell })
    }

    /// Merge the selected cells into one rectangular region.
    ///
    /// The selection is always cleared. On error the model is unchanged.
    ///
    /// # Errors
    /// `InsufficientSelection` for fewer than two cells, `OutOfBounds` for a
    /// selection reaching outside the grid, `Conflicting` when the bounding
    /// rectangle touches several regions or only part of one.
    pub fn attempt_merge(
        &mut self,
        selection: &mut Selection,
        model: &mut GridModel,
    ) -> Result<Region, MergeError> {
        let plan = plan_merge(selection, model);
        selection.clear();
        let plan = match plan {
            Ok(plan) => plan,
            Err(err) => {
                warn!("merge rejected: {err}");
                return Err(err);
            }
        };

        let id = match plan.expands {
            Some(id) => id,
            None => self.fresh_id(model),
        };
        let region = Region::new(id, plan.bounds);

        let mut regions: Vec<Region> = model
            .regions()
            .iter()
            .filter(|existing| existing.id != region.id)
            .cloned()
            .collect();
        regions.push(region.clone());
        model.replace_regions(regions);

        info!(
            "merged {} into region {} ({} regions total)",
            plan.bounds,
            region.id,
            model.regions().len()
        );
        Ok(region)
    }

    fn fresh_id(&mut self, model: &GridModel) -> RegionId {
        loop {
            self.next_id += 1;
            let id = RegionId::new(format!("merged-{}", self.next_id));
            if model.region(&id).is_none() {
                return id;
            }
        }
    }
}

/// Decide how a selection would merge, without touching anything.
///
/// The selection is completed to its bounding rectangle. The rectangle may
/// contain free cells and at most one existing region, which must lie fully
/// inside it; that region is then expanded and keeps its id.
///
/// # Errors
/// See [`MergeResolver::attempt_merge`].
pub fn plan_merge(selection: &Selection, model: &GridModel) -> Result<MergePlan, MergeError> {
    if selection.len() < 2 {
        return Err(MergeError::InsufficientSelection);
    }
    let bounds = selection.bounds().ok_or(MergeError::InsufficientSelection)?;
    if !model.extent().contains_range(&bounds) {
        return Err(MergeError::OutOfBounds {
            row: bounds.end_row,
            col: bounds.end_col,
        });
    }
    if !selection.is_rectangular() {
        debug!("selection expanded to bounding rectangle {bounds}");
    }

    let mut touched = model
        .regions()
        .iter()
        .filter(|region| region.range().intersects(&bounds));
    let expands = match (touched.next(), touched.next()) {
        (None, _) => None,
        (Some(region), None) if bounds.contains_range(&region.range()) => Some(region.id.clone()),
        _ => return Err(MergeError::Conflicting),
    };

    Ok(MergePlan { bounds, expands })
}
