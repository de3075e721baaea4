use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use formflow::ui::celebration::Burst;
use formflow::ui::counter::CounterTier;
use formflow::{
    Field, Intent, LogSink, NotificationKind, NotificationPhase, Response, Submission, Transport,
    TransportError, Workflow,
};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const ENDPOINT: &str = "https://formspree.io/f/demo";
const CELEBRATION_FOR: Duration = Duration::from_millis(1500);

/// Stand-in for a real HTTP client: sleeps briefly, then succeeds unless the
/// message asks it to fail.
struct DemoTransport;

impl Transport for DemoTransport {
    fn send(&self, submission: &Submission) -> Result<Response, TransportError> {
        std::thread::sleep(Duration::from_millis(700));
        if submission.data.message.contains("fail") {
            return Ok(Response {
                status: 500,
                body: r#"{"error":"demo rejection"}"#.to_string(),
            });
        }
        Ok(Response::ok(r#"{"ok":true}"#))
    }
}

struct FieldEditor {
    field: Field,
    value: String,
    cursor: usize,
}

impl FieldEditor {
    fn new(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            cursor: 0,
        }
    }

    fn byte_pos(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, ch: char) {
        let pos = self.byte_pos();
        self.value.insert(pos, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let pos = self.byte_pos();
        self.value.remove(pos);
        true
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    fn cursor_col(&self) -> u16 {
        let prefix: String = self.value.chars().take(self.cursor).collect();
        prefix.width() as u16
    }
}

enum KeyAction {
    Quit,
    Edited,
    Moved,
    Submitted,
    None,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, Hide)?;

    let result = event_loop(&mut stdout);

    execute!(stdout, Show, ResetColor)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut workflow =
        Workflow::new(ENDPOINT, Arc::new(DemoTransport)).with_analytics(Box::new(LogSink));
    let mut editors = [
        FieldEditor::new(Field::Name),
        FieldEditor::new(Field::Email),
        FieldEditor::new(Field::Message),
    ];
    let mut focus = 0usize;
    let mut celebration: Option<(Burst, Instant)> = None;
    let mut render_requested = true;

    loop {
        let now = Instant::now();
        let mut timeout = workflow.poll_timeout(now, Duration::from_millis(120));
        if workflow.state().is_submitting() || celebration.is_some() {
            timeout = timeout.min(Duration::from_millis(80));
        }

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match handle_key(
                    key.code,
                    key.modifiers,
                    &mut workflow,
                    &mut editors,
                    &mut focus,
                ) {
                    KeyAction::Quit => break,
                    KeyAction::None => {}
                    _ => render_requested = true,
                }
            } else {
                render_requested = true;
            }
        }

        if workflow.state().is_submitting() {
            render_requested |= workflow.handle(Intent::Tick);
        }
        render_requested |= workflow.pump(Instant::now());

        if let Some(burst) = workflow.take_celebration() {
            celebration = Some((burst, Instant::now() + CELEBRATION_FOR));
            render_requested = true;
        }
        if celebration
            .as_ref()
            .is_some_and(|(_, until)| Instant::now() >= *until)
        {
            celebration = None;
            render_requested = true;
        }

        // The workflow clears values on success; pull them back into the
        // editors so the surface agrees with the state.
        for editor in &mut editors {
            let current = workflow.state().fields().get(editor.field).value();
            if editor.value != current {
                let value = current.to_string();
                editor.set(&value);
            }
        }

        if render_requested {
            let burst = celebration.as_ref().map(|(burst, _)| burst);
            render(stdout, &workflow, &editors, focus, burst)?;
            render_requested = false;
        }
    }

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn handle_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    workflow: &mut Workflow,
    editors: &mut [FieldEditor; 3],
    focus: &mut usize,
) -> KeyAction {
    if code == KeyCode::Esc
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
    {
        return KeyAction::Quit;
    }

    match code {
        KeyCode::Tab | KeyCode::Down => {
            blur(workflow, editors[*focus].field);
            *focus = (*focus + 1) % editors.len();
            KeyAction::Moved
        }
        KeyCode::BackTab | KeyCode::Up => {
            blur(workflow, editors[*focus].field);
            *focus = (*focus + editors.len() - 1) % editors.len();
            KeyAction::Moved
        }
        KeyCode::Enter => {
            blur(workflow, editors[*focus].field);
            workflow.handle(Intent::Submit);
            KeyAction::Submitted
        }
        KeyCode::Char(ch) => {
            editors[*focus].insert(ch);
            push_edit(workflow, &editors[*focus]);
            KeyAction::Edited
        }
        KeyCode::Backspace => {
            if editors[*focus].backspace() {
                push_edit(workflow, &editors[*focus]);
            }
            KeyAction::Edited
        }
        KeyCode::Left => {
            editors[*focus].move_left();
            KeyAction::Edited
        }
        KeyCode::Right => {
            editors[*focus].move_right();
            KeyAction::Edited
        }
        _ => KeyAction::None,
    }
}

fn blur(workflow: &mut Workflow, field: Field) {
    workflow.handle(Intent::Blur { field });
}

fn push_edit(workflow: &mut Workflow, editor: &FieldEditor) {
    workflow.handle(Intent::Edit {
        field: editor.field,
        value: editor.value.clone(),
    });
}

fn render(
    stdout: &mut io::Stdout,
    workflow: &Workflow,
    editors: &[FieldEditor; 3],
    focus: usize,
    burst: Option<&Burst>,
) -> io::Result<()> {
    let state = workflow.state();
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    let mut row: u16 = 0;
    let mut cursor: Option<(u16, u16)> = None;

    print_line(stdout, &mut row, "Contact", Some(Color::Cyan))?;
    print_line(
        stdout,
        &mut row,
        "Tab: next field   Enter: send   Esc: quit",
        Some(Color::DarkGrey),
    )?;
    print_line(stdout, &mut row, "", None)?;

    for (idx, editor) in editors.iter().enumerate() {
        let field_state = state.fields().get(editor.field);
        let marker = if idx == focus { "> " } else { "  " };
        print_line(
            stdout,
            &mut row,
            &format!("{}{}:", marker, editor.field.label()),
            None,
        )?;

        if idx == focus {
            cursor = Some((4 + editor.cursor_col(), row));
        }
        print_line(stdout, &mut row, &format!("    {}", editor.value), None)?;

        if let Some(error) = field_state.error() {
            print_line(stdout, &mut row, &format!("    {}", error), Some(Color::Red))?;
        }

        if editor.field == Field::Message {
            let counter = state.counter();
            let color = match counter.tier() {
                CounterTier::Normal => Color::DarkGrey,
                CounterTier::Warning => Color::Yellow,
                CounterTier::Over => Color::Red,
            };
            print_line(stdout, &mut row, &format!("    {}", counter.text()), Some(color))?;
        }
    }

    print_line(stdout, &mut row, "", None)?;
    if state.is_submitting() {
        let label = format!("  {} Sending...", state.spinner().glyph());
        print_line(stdout, &mut row, &label, Some(Color::DarkGrey))?;
    } else {
        print_line(stdout, &mut row, "  [ Send Message ]", Some(Color::Cyan))?;
    }

    if let Some(notification) = state.notification() {
        let color = match (notification.kind(), notification.phase()) {
            (_, NotificationPhase::Hiding) => Color::DarkGrey,
            (NotificationKind::Success, _) => Color::Green,
            (NotificationKind::Error, _) => Color::Red,
        };
        print_line(stdout, &mut row, "", None)?;
        print_line(stdout, &mut row, &format!("  {}", notification.text()), Some(color))?;
    }

    if let Some(burst) = burst {
        print_line(stdout, &mut row, "", None)?;
        print_confetti(stdout, &mut row, burst)?;
    }

    if let Some((col, line)) = cursor {
        queue!(stdout, MoveTo(col, line), Show)?;
    } else {
        queue!(stdout, Hide)?;
    }

    stdout.flush()
}

fn print_confetti(stdout: &mut io::Stdout, row: &mut u16, burst: &Burst) -> io::Result<()> {
    const PALETTE: [Color; 3] = [Color::Cyan, Color::Magenta, Color::White];
    const WIDTH: usize = 48;

    queue!(stdout, MoveTo(0, *row))?;
    let mut columns = [None::<u8>; WIDTH];
    for particle in burst.particles() {
        let col = (particle.x * (WIDTH - 1) as f32) as usize;
        columns[col] = Some(particle.color);
    }
    for slot in columns {
        match slot {
            Some(color) => queue!(
                stdout,
                SetForegroundColor(PALETTE[color as usize % PALETTE.len()]),
                Print("*"),
                ResetColor
            )?,
            None => queue!(stdout, Print(" "))?,
        }
    }
    *row += 1;
    Ok(())
}

fn print_line(
    stdout: &mut io::Stdout,
    row: &mut u16,
    text: &str,
    color: Option<Color>,
) -> io::Result<()> {
    queue!(stdout, MoveTo(0, *row))?;
    if let Some(color) = color {
        queue!(stdout, SetForegroundColor(color), Print(text), ResetColor)?;
    } else {
        queue!(stdout, Print(text))?;
    }
    *row += 1;
    Ok(())
}
