use std::sync::Arc;

/// Fixed, ordered lines typed out by the terminal overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script(Arc<[String]>);

impl Default for Script {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Script {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(lines.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

/// Reveal position: line index plus character (not byte) offset within it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Typing,
    Paused,
    Idle,
}

/// Which timer the view should keep running. Everything else is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Ticking,
    LineBreak,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One more character of the active line is visible.
    Revealed,
    /// The active line is fully shown; the line break has begun.
    LineComplete,
    /// Already inside a line break.
    Waiting,
    /// Hidden, minimized or idle.
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    script: Script,
    cursor: Cursor,
    visible: bool,
    minimized: bool,
    in_line_break: bool,
}

impl Typewriter {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            cursor: Cursor::default(),
            visible: false,
            minimized: false,
            in_line_break: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.visible {
            Phase::Hidden
        } else if self.is_finished() {
            Phase::Idle
        } else if self.minimized {
            Phase::Paused
        } else {
            Phase::Typing
        }
    }

    pub fn schedule(&self) -> Schedule {
        match self.phase() {
            Phase::Typing if self.in_line_break => Schedule::LineBreak,
            Phase::Typing => Schedule::Ticking,
            Phase::Hidden | Phase::Paused | Phase::Idle => Schedule::Stopped,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.line >= self.script.len()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    pub fn restore(&mut self) {
        self.minimized = false;
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase() != Phase::Typing {
            return Tick::Inactive;
        }
        if self.in_line_break {
            return Tick::Waiting;
        }
        if self.cursor.offset < self.active_line_len() {
            self.cursor.offset += 1;
            Tick::Revealed
        } else {
            self.in_line_break = true;
            Tick::LineComplete
        }
    }

    /// Called when the line pause has elapsed. Ignored unless a line break
    /// is actually running, so a stale timer cannot skip a line.
    pub fn finish_line_break(&mut self) -> bool {
        if self.schedule() != Schedule::LineBreak {
            return false;
        }
        self.in_line_break = false;
        self.cursor.line += 1;
        self.cursor.offset = 0;
        true
    }

    pub fn completed_lines(&self) -> &[String] {
        let end = self.cursor.line.min(self.script.len());
        &self.script.lines()[..end]
    }

    /// Revealed prefix of the line being typed, `None` once finished.
    pub fn active_text(&self) -> Option<&str> {
        let line = self.script.line(self.cursor.line)?;
        let end = line
            .char_indices()
            .nth(self.cursor.offset)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        Some(&line[..end])
    }

    pub fn shows_caret(&self) -> bool {
        !self.is_finished() && !self.in_line_break
    }

    fn active_line_len(&self) -> usize {
        self.script
            .line(self.cursor.line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(lines: &[&str]) -> Typewriter {
        let mut tw = Typewriter::new(Script::new(lines.iter().copied()));
        tw.show();
        tw
    }

    // Drives ticks and line breaks the way the view's timers would.
    fn run_to_idle(tw: &mut Typewriter) -> (usize, usize) {
        let mut ticks = 0;
        let mut breaks = 0;
        while tw.phase() == Phase::Typing {
            match tw.schedule() {
                Schedule::Ticking => {
                    tw.tick();
                    ticks += 1;
                }
                Schedule::LineBreak => {
                    assert!(tw.finish_line_break());
                    breaks += 1;
                }
                Schedule::Stopped => break,
            }
        }
        (ticks, breaks)
    }

    #[test]
    fn test_starts_hidden() {
        let tw = Typewriter::new(Script::new(["$ ls"]));
        assert_eq!(tw.phase(), Phase::Hidden);
        assert_eq!(tw.schedule(), Schedule::Stopped);
        assert_eq!(tw.cursor(), Cursor::default());
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = visible(&["abc", "de"]);
        assert_eq!(tw.tick(), Tick::Revealed);
        assert_eq!(tw.active_text(), Some("a"));
        assert_eq!(tw.tick(), Tick::Revealed);
        assert_eq!(tw.tick(), Tick::Revealed);
        assert_eq!(tw.active_text(), Some("abc"));
        assert!(tw.shows_caret());

        assert_eq!(tw.tick(), Tick::LineComplete);
        assert_eq!(tw.schedule(), Schedule::LineBreak);
        assert!(!tw.shows_caret());
        assert_eq!(tw.tick(), Tick::Waiting);
        assert_eq!(tw.cursor(), Cursor { line: 0, offset: 3 });

        assert!(tw.finish_line_break());
        assert_eq!(tw.cursor(), Cursor { line: 1, offset: 0 });
        assert_eq!(tw.completed_lines(), &["abc".to_string()]);
        assert_eq!(tw.active_text(), Some(""));
    }

    #[test]
    fn test_offset_monotonic_and_bounded() {
        let mut tw = visible(&["hello", "", "world!"]);
        let mut last = tw.cursor();
        while !tw.is_finished() {
            if tw.schedule() == Schedule::LineBreak {
                tw.finish_line_break();
            } else {
                tw.tick();
            }
            let now = tw.cursor();
            if now.line == last.line {
                assert!(now.offset >= last.offset);
            } else {
                assert_eq!(now.line, last.line + 1);
                assert_eq!(now.offset, 0);
            }
            if let Some(line) = tw.script().line(now.line) {
                assert!(now.offset <= line.chars().count());
            }
            last = now;
        }
    }

    #[test]
    fn test_reaches_idle_after_all_lines() {
        let lines = ["$ whoami", "tamish", "", "$ exit"];
        let mut tw = visible(&lines);
        let (ticks, breaks) = run_to_idle(&mut tw);

        let expected_ticks: usize = lines.iter().map(|l| l.chars().count() + 1).sum();
        assert_eq!(ticks, expected_ticks);
        assert_eq!(breaks, lines.len());
        assert_eq!(tw.phase(), Phase::Idle);
        assert_eq!(tw.schedule(), Schedule::Stopped);
        assert_eq!(tw.active_text(), None);
        assert_eq!(tw.completed_lines().len(), lines.len());

        let done = tw.cursor();
        for _ in 0..10 {
            assert_eq!(tw.tick(), Tick::Inactive);
        }
        assert!(!tw.finish_line_break());
        assert_eq!(tw.cursor(), done);
    }

    #[test]
    fn test_empty_script_is_idle_immediately() {
        let mut tw = visible(&[]);
        assert_eq!(tw.phase(), Phase::Idle);
        assert_eq!(tw.tick(), Tick::Inactive);
        assert!(tw.completed_lines().is_empty());
        assert_eq!(tw.active_text(), None);
        assert!(!tw.shows_caret());
    }

    #[test]
    fn test_pause_and_resume_keep_cursor() {
        let mut tw = visible(&["secret plans", "none"]);
        for _ in 0..4 {
            tw.tick();
        }
        let before = tw.cursor();

        tw.minimize();
        assert_eq!(tw.phase(), Phase::Paused);
        assert_eq!(tw.schedule(), Schedule::Stopped);
        for _ in 0..20 {
            assert_eq!(tw.tick(), Tick::Inactive);
        }
        tw.restore();
        assert_eq!(tw.cursor(), before);

        tw.hide();
        assert_eq!(tw.phase(), Phase::Hidden);
        for _ in 0..20 {
            assert_eq!(tw.tick(), Tick::Inactive);
        }
        tw.show();
        assert_eq!(tw.cursor(), before);
        assert_eq!(tw.tick(), Tick::Revealed);
        assert_eq!(tw.cursor().offset, before.offset + 1);
    }

    #[test]
    fn test_line_break_survives_minimize() {
        let mut tw = visible(&["ab", "cd"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick(), Tick::LineComplete);

        tw.toggle_minimized();
        assert!(tw.is_minimized());
        // the pause timer fired late, after minimizing
        assert!(!tw.finish_line_break());
        assert_eq!(tw.cursor(), Cursor { line: 0, offset: 2 });

        tw.toggle_minimized();
        assert_eq!(tw.schedule(), Schedule::LineBreak);
        assert!(tw.finish_line_break());
        assert_eq!(tw.cursor(), Cursor { line: 1, offset: 0 });
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut tw = visible(&["✓ Done"]);
        tw.tick();
        assert_eq!(tw.active_text(), Some("✓"));
        tw.tick();
        assert_eq!(tw.active_text(), Some("✓ "));
    }

    #[test]
    fn test_minimized_idle_stays_idle() {
        let mut tw = visible(&["x"]);
        run_to_idle(&mut tw);
        tw.minimize();
        assert_eq!(tw.phase(), Phase::Idle);
        tw.hide();
        assert_eq!(tw.phase(), Phase::Hidden);
        tw.show();
        assert_eq!(tw.phase(), Phase::Idle);
    }
}
