//! Event emission and one-time document preamble
//!
//! `EventWriter` is the single owner of the destination stream, the
//! layer counter, and the decision about whether the preamble still
//! needs writing. Output is append-only: nothing already written is
//! ever revisited, so a run that fails midway leaves a valid script
//! holding the events emitted so far.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::style::ResolvedStyle;
use crate::svg::ShapeKind;

use super::profile::ScriptProfile;

/// How to open a destination file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Append to existing content; the preamble is written only when
    /// the file is empty at open time
    Append,
    /// Discard existing content before the first write
    Truncate,
}

/// Writes the preamble and `Dialogue:` events to one destination
pub struct EventWriter<W: Write> {
    out: W,
    profile: ScriptProfile,
    next_layer: u32,
    needs_preamble: bool,
}

impl EventWriter<BufWriter<File>> {
    /// Open a destination file.
    ///
    /// Truncation happens at open, before any write. With `Append`, an
    /// existing non-empty file keeps its content and gets no second
    /// preamble.
    pub fn open(
        path: impl AsRef<Path>,
        profile: ScriptProfile,
        mode: OpenMode,
    ) -> io::Result<Self> {
        let file = match mode {
            OpenMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
            OpenMode::Truncate => OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?,
        };
        let empty = file.metadata()?.len() == 0;
        Ok(Self::with_destination_state(
            BufWriter::new(file),
            profile,
            empty,
        ))
    }
}

impl<W: Write> EventWriter<W> {
    /// Writer over an empty destination; the preamble will be written
    pub fn new(out: W, profile: ScriptProfile) -> Self {
        Self::with_destination_state(out, profile, true)
    }

    /// Writer appending to a destination that already has content;
    /// the preamble is suppressed
    pub fn append_to(out: W, profile: ScriptProfile) -> Self {
        Self::with_destination_state(out, profile, false)
    }

    fn with_destination_state(out: W, profile: ScriptProfile, destination_empty: bool) -> Self {
        Self {
            out,
            profile,
            next_layer: 1,
            needs_preamble: destination_empty,
        }
    }

    /// The layer the next emitted event will receive
    pub fn next_layer(&self) -> u32 {
        self.next_layer
    }

    /// Write the script preamble if the destination was empty at open
    /// time and it has not been written yet. Idempotent; emitting
    /// events never triggers it.
    pub fn ensure_preamble(&mut self) -> io::Result<()> {
        if !self.needs_preamble {
            return Ok(());
        }

        writeln!(self.out, "[Script Info]")?;
        writeln!(
            self.out,
            "; Script generated by svg2ass {}",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(self.out, "Title: {}", self.profile.title)?;
        writeln!(self.out, "ScriptType: v4.00+")?;
        writeln!(self.out, "WrapStyle: 0")?;
        writeln!(self.out, "ScaledBorderAndShadow: yes")?;
        writeln!(self.out, "YCbCr Matrix: None")?;
        writeln!(self.out)?;
        writeln!(self.out, "[Aegisub Project Garbage]")?;
        writeln!(self.out, "Active Line: 0")?;
        writeln!(self.out)?;
        writeln!(self.out, "[V4+ Styles]")?;
        writeln!(
            self.out,
            "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, \
             OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, \
             ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, \
             Alignment, MarginL, MarginR, MarginV, Encoding"
        )?;
        writeln!(
            self.out,
            "Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,\
             0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1"
        )?;
        writeln!(
            self.out,
            "Style: {},Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,\
             0,0,0,0,100,100,0,0,1,2,0,7,10,10,10,1",
            self.profile.event_style
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "[Events]")?;
        writeln!(
            self.out,
            "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text"
        )?;

        self.needs_preamble = false;
        Ok(())
    }

    /// Append one drawing event and advance the layer counter.
    ///
    /// Returns the layer the event was written with. Layers start at 1
    /// and increase by exactly 1 per event for the lifetime of this
    /// writer.
    pub fn write_event(
        &mut self,
        path_text: &str,
        kind: ShapeKind,
        style: &ResolvedStyle,
    ) -> io::Result<u32> {
        let layer = self.next_layer;
        writeln!(
            self.out,
            r"Dialogue: {layer},{start},{end},{event_style},{kind},0,0,0,,{{\c&H{fill}&\3c&H{stroke}&}}{{\p1+}}{path_text}{{\p0}}",
            start = self.profile.event_start,
            end = self.profile.event_end,
            event_style = self.profile.event_style,
            fill = style.fill,
            stroke = style.stroke,
        )?;
        self.next_layer += 1;
        Ok(layer)
    }

    /// Flush and hand back the underlying sink
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
