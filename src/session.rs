use crate::numeric::{extract_numeric_token, format_number, parse_or_nan, round8};

/// Axis the artwork is being centered on. Purely cosmetic; it decides how
/// the two offsets are labeled, never how they are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn toggled(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub fn start_label(self) -> &'static str {
        match self {
            Axis::Horizontal => "Left offset",
            Axis::Vertical => "Top offset",
        }
    }

    pub fn end_label(self) -> &'static str {
        match self {
            Axis::Horizontal => "Right offset",
            Axis::Vertical => "Bottom offset",
        }
    }
}

/// One of the three numeric entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PreviousPosition,
    OffsetStart,
    OffsetEnd,
}

/// The whole state of one centering calculation.
///
/// Fields hold raw text, not numbers, so partial entries like "-" or "3."
/// survive between keystrokes. Conversion to f64 happens only inside
/// [`Session::calculate`] and [`Session::increment`].
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub axis: Axis,
    pub previous_position: String,
    pub offset_start: String,
    pub offset_end: String,
    pub result: String,
    pub finished: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            previous_position: String::new(),
            offset_start: String::new(),
            offset_end: String::new(),
            result: String::new(),
            finished: false,
        }
    }
}

impl Session {
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    /// Store `raw` into `field` after running it through the numeric token
    /// extractor. Anything that doesn't survive extraction clears the field.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        *self.field_mut(field) = extract_numeric_token(raw).to_string();
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::PreviousPosition => &self.previous_position,
            Field::OffsetStart => &self.offset_start,
            Field::OffsetEnd => &self.offset_end,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::PreviousPosition => &mut self.previous_position,
            Field::OffsetStart => &mut self.offset_start,
            Field::OffsetEnd => &mut self.offset_end,
        }
    }

    /// Nudge `field` by `delta`. An empty field steps from zero; a field
    /// whose text doesn't parse (or overflows the rounding) lands on "0".
    pub fn increment(&mut self, field: Field, delta: f64) {
        let text = self.field(field);
        let base = if text.is_empty() {
            0.0
        } else {
            parse_or_nan(text)
        };
        let next = round8(base + delta);
        let replacement = if next.is_finite() {
            format_number(next)
        } else {
            "0".to_string()
        };
        *self.field_mut(field) = replacement;
    }

    pub fn set_result(&mut self, result: &str) {
        self.result = result.to_string();
    }

    pub fn set_finished(&mut self, finished: bool) {
        self.finished = finished;
    }

    /// Back to the canonical initial state, axis included.
    pub fn reset(&mut self) {
        *self = Session::default();
    }

    /// Compute the recentered coordinate from the three fields.
    ///
    /// The offsets describe the gaps on either side of the artwork; half
    /// their imbalance is the distance to move. Blank or partial fields
    /// parse as NaN and flow through to a visible "NaN" result rather than
    /// aborting. Always finishes the session.
    pub fn calculate(&mut self) -> &str {
        let previous = parse_or_nan(&self.previous_position);
        let start = parse_or_nan(&self.offset_start);
        let end = parse_or_nan(&self.offset_end);

        let shift = (start + end) / 2.0 - start;
        let new_position = round8(previous - shift);
        let text = format_number(new_position);

        self.set_result(&text);
        self.set_finished(true);
        &self.result
    }
}
