use super::{
    chart::bar_color, runner::RunnerEvent, Algorithm, Schedule, Statistics, Ticks,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

/// What the terminal shows for one frame of a replay.
pub struct ReplayFrame<'a> {
    pub algorithm: Algorithm,
    pub schedule: &'a Schedule,
    pub statistics: &'a Statistics,
    pub now: Ticks,
    pub paused: bool,
}

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new(tick_rate: Duration) -> Result<Self, io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= tick_rate {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        // Set up the terminal-user-interface
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, input_rx })
    }

    pub fn draw(&mut self, frame: &ReplayFrame<'_>) -> Result<(), io::Error> {
        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(5),
                    Constraint::Min(5),
                    Constraint::Length(1),
                ])
                .split(f.size());

            draw_current_process(f, chunks[0], frame);
            draw_gantt_chart(f, chunks[1], frame);
            draw_process_table(f, chunks[2], frame);

            let help = Paragraph::new("q: quit | p: pause | r: resume | s: step | n: next algorithm")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(help, chunks[3]);
        })?;
        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // Get the user's input and return a matching event
        match self.input_rx.recv() {
            Ok(DisplayEvent::Input(key)) => {
                if key.modifiers.is_empty() {
                    match key.code {
                        KeyCode::Char('q') => return RunnerEvent::Quit,
                        KeyCode::Char('p') => return RunnerEvent::Pause,
                        KeyCode::Char('r') => return RunnerEvent::Resume,
                        KeyCode::Char('s') => return RunnerEvent::Step,
                        KeyCode::Char('n') => return RunnerEvent::NextAlgorithm,
                        _ => {}
                    };
                }
            }
            Ok(DisplayEvent::Tick) => {}
            Err(_) => return RunnerEvent::Quit,
        }
        RunnerEvent::None
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

fn draw_current_process<B: Backend>(f: &mut Frame<B>, area: Rect, frame: &ReplayFrame<'_>) {
    let status = match frame.schedule.running_at(frame.now) {
        Some(interval) => format!(
            "t={} | {} | {} | {}..{}",
            frame.now, interval.pid, interval.name, interval.start, interval.end
        ),
        None if frame.now >= frame.schedule.span() => {
            format!("t={} | All processes completed.", frame.now)
        }
        None => format!("t={} | The processor is idle.", frame.now),
    };
    let title = if frame.paused {
        "Current Process (paused)"
    } else {
        "Current Process"
    };

    let process = Paragraph::new(status)
        .style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::LightBlue),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(process, area);
}

fn draw_gantt_chart<B: Backend>(f: &mut Frame<B>, area: Rect, frame: &ReplayFrame<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Gantt Chart (0-{})", frame.schedule.span()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let span = frame.schedule.span();
    let elapsed = frame.schedule.clipped_to(frame.now);
    if span == 0 || elapsed.is_empty() {
        return;
    }

    // Bars keep their final size while the replay fills them in; the
    // trailing filler takes whatever has not happened yet.
    let mut constraints: Vec<Constraint> = elapsed
        .iter()
        .map(|interval| Constraint::Ratio(ratio_part(interval.duration()), ratio_part(span)))
        .collect();
    constraints.push(Constraint::Min(0));

    let bars = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (index, interval) in elapsed.iter().enumerate() {
        let bar = Paragraph::new(interval.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().bg(bar_color(index)).fg(Color::White));
        f.render_widget(bar, bars[index]);
    }
}

fn draw_process_table<B: Backend>(f: &mut Frame<B>, area: Rect, frame: &ReplayFrame<'_>) {
    let items = frame.statistics.processes.iter().map(|process| {
        let finished = process.completion_time <= frame.now;
        let pending = |value: Ticks| {
            if finished {
                value.to_string()
            } else {
                "-".to_owned()
            }
        };

        Row::new(vec![
            Cell::from(process.pid.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("|"),
            Cell::from(process.name.clone()),
            Cell::from("|"),
            Cell::from(process.arrival_time.to_string()),
            Cell::from(process.burst_time.to_string()),
            Cell::from(process.priority.to_string()),
            Cell::from("|"),
            Cell::from(pending(process.completion_time)),
            Cell::from(pending(process.turnaround_time)),
            Cell::from(pending(process.waiting_time)),
        ])
    });

    let title = format!(
        "{} | Average Waiting Time: {:.2} | Average Turnaround Time: {:.2}",
        frame.algorithm,
        frame.statistics.average_waiting_time,
        frame.statistics.average_turnaround_time
    );

    let table = Table::new(items)
        .header(
            Row::new(vec![
                "PID",
                "|",
                "Name",
                "|",
                "Arrival",
                "Burst",
                "Priority",
                "|",
                "Completion",
                "Turnaround",
                "Waiting",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .widths(&[
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(7),
        ])
        .block(Block::default().title(title).borders(Borders::ALL))
        .style(Style::default().fg(Color::LightGreen))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn ratio_part(ticks: Ticks) -> u32 {
    u32::try_from(ticks).unwrap_or(u32::MAX)
}
