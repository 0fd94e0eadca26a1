//! Recursive resolution of `#pragma use` directives.
//!
//! Files are resolved depth first. A file is *pending* while its own
//! directives are being resolved and *resolved* once it has been appended to
//! the result, after everything it uses. A directive naming a pending or
//! resolved file is skipped without complaint, which both deduplicates
//! diamond-shaped dependencies and breaks cycles. Cycles are never reported.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use log::{debug, trace};

use crate::{
    error::Result,
    path::{absolutize, canonical_path},
    scan::directives,
    source::{Source, SourceFile},
};

/// Ordered, duplicate-free list of resolved files with a membership index.
#[derive(Debug, Default)]
struct ResolutionSet {
    files: Vec<SourceFile>,
    index: HashSet<PathBuf>,
}

impl ResolutionSet {
    fn contains(&self, path: &Path) -> bool {
        self.index.contains(path)
    }

    fn push(&mut self, file: SourceFile) {
        if self.index.insert(file.as_path().to_owned()) {
            self.files.push(file);
        }
    }

    fn into_files(self) -> Vec<SourceFile> {
        self.files
    }
}

#[derive(Debug, Default)]
struct Resolver {
    resolved: ResolutionSet,
    // Files whose dependencies are currently being resolved, i.e. the
    // current file and all of its ancestors
    pending: HashSet<PathBuf>,
}

impl Resolver {
    fn is_excluded(&self, path: &Path) -> bool {
        self.resolved.contains(path) || self.pending.contains(path)
    }

    /// Canonical paths of every directive in `source`, in document order.
    fn references<S: Source + ?Sized>(source: &S, dir: &Path) -> Result<Vec<PathBuf>> {
        let contents = source.contents()?;
        Ok(directives(&contents)
            .iter()
            .map(|reference| canonical_path(reference, dir))
            .collect())
    }

    fn resolve_references(&mut self, references: Vec<PathBuf>) -> Result<()> {
        for reference in references {
            // A sibling resolved earlier may already have pulled this file in
            if self.is_excluded(&reference) {
                trace!("skipping already visited {:?}", reference);
                continue;
            }
            self.resolve_file(reference)?;
        }
        Ok(())
    }

    /// Resolve the absolute, cleaned `filename` and everything it uses.
    fn resolve_file(&mut self, filename: PathBuf) -> Result<()> {
        debug!("resolving {:?}", filename);
        let current_file = SourceFile::from(&filename);
        let dir = filename
            .parent()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| filename.clone());
        // The file is fully read and closed before recursing
        let references = Self::references(&current_file, &dir)?;

        self.pending.insert(filename.clone());
        let result = self.resolve_references(references);
        self.pending.remove(&filename);
        result?;

        self.resolved.push(current_file);
        Ok(())
    }

    fn resolve_roots<I>(&mut self, filenames: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        for filename in filenames {
            let filename = absolutize(filename)?;
            if self.resolved.contains(&filename) {
                trace!("skipping repeated root {:?}", filename);
                continue;
            }
            self.resolve_file(filename)?;
        }
        Ok(())
    }
}

/// Recursively resolve the files used by `filenames`.
///
/// The returned list holds, for each root in the given order, its transitive
/// dependencies followed by the root itself. Every file appears exactly once
/// and after all of the files it uses. Relative filenames are resolved
/// against the current working directory.
///
/// Resolution stops at the first file that cannot be read.
pub fn includes<I>(filenames: I) -> Result<Vec<SourceFile>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut resolver = Resolver::default();
    resolver.resolve_roots(filenames)?;
    trace!("resolved: {:?}", resolver.resolved);
    Ok(resolver.resolved.into_files())
}

/// Recursively resolve the files used by `source`, relative to its own
/// [`Source::dir`].
///
/// `source` itself is not part of the returned list. This is the entry point
/// for in-memory sources such as [`SourceBuf`](crate::SourceBuf).
pub fn includes_of<S: Source + ?Sized>(source: &S) -> Result<Vec<SourceFile>> {
    let dir = source.dir()?;
    let references = Resolver::references(source, &dir)?;

    let mut resolver = Resolver::default();
    resolver.resolve_references(references)?;
    trace!("resolved: {:?}", resolver.resolved);
    Ok(resolver.resolved.into_files())
}
