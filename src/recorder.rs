//! Bounded recording of three-space data
//!
//! `SpaceRecorder` keeps the most recent vectors pushed to it, such as the
//! positions of a body along its orbit, up to a size limit. Older entries are
//! dropped first. The recording can be written as a whitespace separated
//! table for R:
//!
//! ```text
//! # Formated for R frames <- read.table(track.dat)
//! x y z
//! 0 1 2 3
//! 1 1.5 2 3
//! ```

use crate::cartesian::format::format_g;
use crate::cartesian::Space;
use crate::errors::{io_err, Result};
use log::{trace, warn};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Stores the most recent `size_limit` vectors in push order
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceRecorder {
    size_limit: usize,
    data: VecDeque<Space>,
}

impl SpaceRecorder {
    /// Default size limit
    pub const DEFAULT_SIZE: usize = 1024;

    /// Creates an empty recorder holding at most `size_limit` vectors
    ///
    /// Storage grows as vectors are pushed; only up to [`Self::DEFAULT_SIZE`]
    /// slots are reserved up front, so any limit is accepted.
    pub fn new(size_limit: usize) -> Self {
        SpaceRecorder {
            size_limit,
            data: VecDeque::with_capacity(size_limit.min(Self::DEFAULT_SIZE)),
        }
    }

    /// Maximum number of vectors retained
    pub fn size_limit(&self) -> usize {
        self.size_limit
    }

    /// Changes the size limit; excess entries are dropped on the next push
    pub fn set_size_limit(&mut self, size_limit: usize) {
        self.size_limit = size_limit;
    }

    /// Number of vectors currently retained
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nothing has been retained
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The vector at `idx`, counting from the oldest retained entry
    pub fn get(&self, idx: usize) -> Option<&Space> {
        self.data.get(idx)
    }

    /// Iterates from the oldest retained vector to the newest
    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.data.iter()
    }

    /// Appends `v`, evicting the oldest entries so the limit is never exceeded
    pub fn push(&mut self, v: Space) {
        while !self.data.is_empty() && self.data.len() >= self.size_limit {
            if let Some(dropped) = self.data.pop_front() {
                trace!("recorder full, dropping {:?}", dropped);
            }
        }
        if self.size_limit > 0 {
            self.data.push_back(v);
        }
    }

    /// Drops every retained vector and releases storage beyond the default size
    pub fn clear(&mut self) {
        self.data.clear();
        self.data.shrink_to(Self::DEFAULT_SIZE);
    }

    /// Writes the recording as an R table
    ///
    /// `name` is only used in the header comment. Every row is prefixed by
    /// the entry's index; entries equal to the origin are skipped when
    /// `skip_origin` is set, leaving gaps in the index column.
    pub fn write_r_table<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        skip_origin: bool,
    ) -> std::io::Result<()> {
        writeln!(out, "# Formated for R frames <- read.table({})", name)?;
        writeln!(out, "x y z")?;

        for (k, v) in self.data.iter().enumerate() {
            if skip_origin && *v == Space::UO {
                continue;
            }
            writeln!(
                out,
                "{} {} {} {}",
                k,
                format_g(v.x),
                format_g(v.y),
                format_g(v.z)
            )?;
        }
        Ok(())
    }

    /// Writes the recording as an R table to the file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::RecorderIo`](crate::SpaceError::RecorderIo) when
    /// the file cannot be created or written.
    pub fn write_r_file<P: AsRef<Path>>(&self, path: P, skip_origin: bool) -> Result<()> {
        let path = path.as_ref();
        let write_file = || -> std::io::Result<()> {
            let mut out = BufWriter::new(File::create(path)?);
            self.write_r_table(&mut out, &path.display().to_string(), skip_origin)?;
            out.flush()
        };

        write_file().map_err(|e| {
            warn!("unable to write recording to {}: {}", path.display(), e);
            io_err(path, e)
        })
    }
}

impl Default for SpaceRecorder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

impl Extend<Space> for SpaceRecorder {
    fn extend<I: IntoIterator<Item = Space>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}
