use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashError {
    #[error("dash pattern needs at least one segment")]
    Empty,
    #[error("dash segment {index} has length {length}, segments must be positive")]
    NonPositiveSegment { index: usize, length: f32 },
    #[error("dash segment {index} is not a finite number")]
    NonFiniteSegment { index: usize },
    #[error("dash phase must not be negative but was {0}")]
    NegativePhase(f32),
    #[error("dash phase is not a finite number")]
    NonFinitePhase,
}

/// Whether a unit of path length falls on a painted run or in a gap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DashSegment {
    Paint,
    Gap,
}

impl DashSegment {
    /// Runs at even indices are painted, odd ones are gaps.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            DashSegment::Paint
        } else {
            DashSegment::Gap
        }
    }

    pub fn is_paint(self) -> bool {
        self == DashSegment::Paint
    }

    pub fn is_gap(self) -> bool {
        self == DashSegment::Gap
    }
}

/// Alternating on/off run lengths along a stroke, plus the phase at which
/// the pattern starts.
///
/// A run of length `l` covers `ceil(l)` whole units when it is walked by a
/// [`DashCursor`].
#[derive(Clone, Debug, PartialEq)]
pub struct DashPattern {
    array: Vec<f32>,
    units: Vec<u32>,
    phase: f32,
}

impl DashPattern {
    pub fn new(array: Vec<f32>, phase: f32) -> Result<Self, DashError> {
        if array.is_empty() {
            return Err(DashError::Empty);
        }
        if !phase.is_finite() {
            return Err(DashError::NonFinitePhase);
        }
        if phase < 0.0 {
            return Err(DashError::NegativePhase(phase));
        }

        let mut units = Vec::with_capacity(array.len());
        for (index, &length) in array.iter().enumerate() {
            if !length.is_finite() {
                return Err(DashError::NonFiniteSegment { index });
            }
            if length <= 0.0 {
                return Err(DashError::NonPositiveSegment { index, length });
            }
            // `as` saturates, so absurdly long runs clamp to u32::MAX units.
            units.push(length.ceil() as u32);
        }

        Ok(DashPattern {
            array,
            units,
            phase,
        })
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Number of whole units covered by run `index`.
    pub fn units(&self, index: usize) -> u32 {
        self.units[index]
    }

    /// Units after which the on/off sequence repeats.
    pub fn period(&self) -> u64 {
        self.units.iter().map(|&u| u64::from(u)).sum()
    }

    /// A cursor positioned at this pattern's own phase, truncated to whole
    /// units.
    pub fn cursor(&self) -> DashCursor<'_> {
        DashCursor::new(self, self.phase as usize)
    }
}

/// Walks a [`DashPattern`] one unit at a time.
///
/// The pattern repeats forever, so the cursor never runs out; it also
/// implements [`Iterator`] and never returns `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashCursor<'a> {
    pattern: &'a DashPattern,
    index: usize,
    position: u32,
}

impl<'a> DashCursor<'a> {
    pub fn new(pattern: &'a DashPattern, phase: usize) -> Self {
        let mut cursor = DashCursor {
            pattern,
            index: 0,
            position: 0,
        };
        DashCursor::skip(&mut cursor, phase as u64);
        cursor
    }

    /// Consumes `units` units at once, landing in the same state as that many
    /// calls to [`DashCursor::advance`].
    pub fn skip(&mut self, units: u64) {
        // Stepping a whole period lands back on the same state.
        let mut remaining = units % self.pattern.period();
        loop {
            let left = u64::from(self.pattern.units(self.index) - self.position);
            if remaining < left {
                self.position += remaining as u32;
                return;
            }
            remaining -= left;
            self.position = 0;
            self.index = (self.index + 1) % self.pattern.len();
        }
    }

    /// Consumes one unit and reports whether that unit was painted.
    pub fn advance(&mut self) -> DashSegment {
        let was = self.current();
        self.position += 1;
        if self.position == self.pattern.units(self.index) {
            self.position = 0;
            self.index = (self.index + 1) % self.pattern.len();
        }
        was
    }

    /// What the next call to [`DashCursor::advance`] will return.
    pub fn current(&self) -> DashSegment {
        DashSegment::for_index(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> u32 {
        self.position
    }
}

impl Iterator for DashCursor<'_> {
    type Item = DashSegment;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
