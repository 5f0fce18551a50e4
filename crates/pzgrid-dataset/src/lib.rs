//! Puzzle records and datasets built from decoded puzzles.
//!
//! A [`RecordRequest`] carries everything known about one puzzle before it is
//! decoded. [`build_record`] dispatches it to a scheme, renders the canonical
//! problem text and assigns a content-addressed [`PuzzleId`]. [`Dataset::merge`]
//! pairs the resulting records with solutions into the per-type dataset shape
//! consumed downstream.
//!
//! Nothing here touches the filesystem or the network; callers own all I/O.

pub use self::{dataset::*, identity::*, record::*};

mod dataset;
mod identity;
mod record;
