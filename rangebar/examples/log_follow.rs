//! A growing log with a vertical scrollbar in the rightmost column.
//!
//! New lines arrive four times a second; while the view rests at the end it
//! follows them. Use the wheel, the arrow cells or drag the handle to scroll
//! back. Hold Shift on the arrows for bigger steps. `q` quits.

use std::cell::Cell;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CtEvent, EventStream, KeyCode,
};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use futures::StreamExt;
use rangebar::event::from_crossterm;
use rangebar::wakeup::{self, WakeupReceiver};
use rangebar::{
    InputTracker, RepeatTimer, ScrollAxis, Scrollbar, ScrollbarConfig, ScrollbarEvent,
    TrackLayout,
};
use simplelog::{Config, LevelFilter, WriteLogger};

struct View {
    lines: Vec<String>,
    width: u16,
    height: u16,
    /// Content offset, kept in sync through the `scrolled` signal.
    offset: Rc<Cell<i32>>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let log_file = File::create("log_follow.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // Terminal cells: one line per row, three rows per notch.
    let config = ScrollbarConfig::new()
        .line_height(1.0)
        .lines_per_notch(3)
        .steps(1, 1, 10)
        .stick_to_end();

    let timer = Rc::new(RepeatTimer::new());
    let input = Rc::new(InputTracker::new());
    let mut bar = Scrollbar::with_config(ScrollAxis::Vertical, config, timer.clone(), input.clone())
        .expect("valid scrollbar config");

    let (sender, mut wakeups) = wakeup::channel();
    bar.install_wakeup(sender);

    let (width, height) = terminal::size()?;
    let mut view = View {
        lines: Vec::new(),
        width,
        height,
        offset: Rc::new(Cell::new(0)),
    };
    let offset = Rc::clone(&view.offset);
    bar.scrolled().connect(move |value| offset.set(*value));

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = run(&mut bar, &timer, &input, &mut wakeups, &mut view, &mut stdout).await;

    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

async fn run(
    bar: &mut Scrollbar,
    timer: &RepeatTimer,
    input: &InputTracker,
    wakeups: &mut WakeupReceiver,
    view: &mut View,
    out: &mut Stdout,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut producer = tokio::time::interval(Duration::from_millis(250));
    let driver = timer.run();
    tokio::pin!(driver);

    resize(bar, view);
    draw(bar, view, out)?;

    loop {
        tokio::select! {
            _ = &mut driver => {}
            _ = producer.tick() => {
                view.lines.push(format!("{:>6}  event from the producer", view.lines.len() + 1));
                bar.set_scroll_dimensions(u32::from(view.height), view.lines.len() as u32);
            }
            Some(()) = wakeups.recv() => {
                wakeups.drain();
                draw(bar, view, out)?;
            }
            event = events.next() => {
                let Some(event) = event else {
                    return Ok(());
                };
                let event = event?;
                input.observe(&event);

                match &event {
                    CtEvent::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                        return Ok(());
                    }
                    CtEvent::Resize(width, height) => {
                        view.width = *width;
                        view.height = *height;
                        resize(bar, view);
                        draw(bar, view, out)?;
                    }
                    CtEvent::Mouse(mouse) => {
                        let column = view.width.saturating_sub(1);
                        let origin = (column, 0);
                        match from_crossterm(mouse, origin, bar.config().notch_units) {
                            // Presses only count on the scrollbar column.
                            Some(ScrollbarEvent::PointerDown(_)) if mouse.column != column => {}
                            Some(scroll_event) => {
                                bar.handle_event(scroll_event);
                            }
                            None => {}
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

fn resize(bar: &Scrollbar, view: &View) {
    bar.set_track_layout(TrackLayout::new(f32::from(view.height), 1.0, 1.0));
    bar.set_scroll_dimensions(u32::from(view.height), view.lines.len() as u32);
}

fn draw(bar: &Scrollbar, view: &View, out: &mut Stdout) -> io::Result<()> {
    let text_width = usize::from(view.width.saturating_sub(1));
    let first = usize::try_from(view.offset.get()).unwrap_or(0);
    let geometry = bar.geometry();
    let handle_start = geometry.handle_start(&bar.track_layout());
    let handle_end = handle_start + geometry.length.max(1.0);

    queue!(out, Clear(ClearType::All))?;
    for row in 0..view.height {
        let line = view
            .lines
            .get(first + usize::from(row))
            .map(String::as_str)
            .unwrap_or("");
        let text: String = line.chars().take(text_width).collect();

        let cell = f32::from(row);
        let glyph = if row == 0 {
            '▲'
        } else if row + 1 == view.height {
            '▼'
        } else if geometry.visible && cell >= handle_start.floor() && cell < handle_end {
            '█'
        } else {
            '░'
        };

        queue!(
            out,
            MoveTo(0, row),
            Print(text),
            MoveTo(view.width.saturating_sub(1), row),
            Print(glyph)
        )?;
    }
    out.flush()
}
