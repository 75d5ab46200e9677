//! Merge Use Case implementation

use tracing::{debug, info};

use crate::domain::ports::FileSystem;
use crate::domain::{splice, MarkerPair};
use crate::error::{ConcatError, ConcatResult};

use super::options::MergeOptions;
use super::result::{MergeResult, TargetOutcome};

/// Merge Use Case
///
/// Reads the base fragment once, then splices it into each target in order.
/// The first failure stops the run; targets already written stay written.
pub struct MergeUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> MergeUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, options: &MergeOptions) -> ConcatResult<MergeResult> {
        let base = self
            .fs
            .read(&options.base)
            .map_err(|source| ConcatError::BaseUnreadable {
                path: options.base.clone(),
                source,
            })?;
        let markers = MarkerPair::for_base_path(&options.base);

        let mut result = MergeResult::new(options.base.clone(), options.dry_run);

        for target in &options.targets {
            let previous = self
                .fs
                .read(target)
                .map_err(|source| ConcatError::TargetUnreadable {
                    path: target.clone(),
                    source,
                })?;

            let spliced = splice(&previous, &base, &markers).map_err(|problem| {
                ConcatError::MalformedMarkers {
                    path: target.clone(),
                    problem,
                }
            })?;
            let changed = spliced.content != previous;

            if options.dry_run {
                debug!(
                    path = %target.display(),
                    action = ?spliced.action,
                    changed,
                    "dry run, not writing"
                );
            } else {
                self.fs
                    .write(target, &spliced.content)
                    .map_err(|source| ConcatError::TargetUnwritable {
                        path: target.clone(),
                        source,
                    })?;
                debug!(
                    path = %target.display(),
                    action = ?spliced.action,
                    changed,
                    "wrote target"
                );
            }

            result.targets.push(TargetOutcome {
                path: target.clone(),
                action: spliced.action,
                changed,
                previous,
                merged: spliced.content,
            });
        }

        info!(
            base = %options.base.display(),
            targets = result.targets.len(),
            changed = result.changed_count(),
            "merge complete"
        );

        Ok(result)
    }
}
