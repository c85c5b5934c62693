use std::fs::File;
use std::io::stdout;

use accordion::{
    Accordion, AccordionBuilder, AccordionConfig, AccordionEvent, Command, EventQueue, MemoryDom,
};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, execute, style::Print};
use simplelog::{Config, LevelFilter, WriteLogger};

const FAQ: &[(&str, &str)] = &[
    ("What is an accordion?", "A list of panels toggled by triggers."),
    ("How do I navigate?", "Arrow keys move, Enter or Space toggles."),
    ("Can several panels be open?", "Only when multiselectable is set."),
];

fn build_dom() -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.insert("faq");
    for i in 0..FAQ.len() {
        dom.insert_under(format!("faq-trigger-{i}"), "faq")
            .data("role", "trigger");
        dom.insert_under(format!("faq-panel-{i}"), "faq")
            .data("role", "panel")
            .natural_height(1);
    }
    dom
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("faq.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let events = EventQueue::new();
    let config = AccordionConfig {
        default_expanded: vec![true],
        ..Default::default()
    };
    let mut widget = AccordionBuilder::new("faq")
        .config(config)
        .mount(build_dom(), events.clone())
        .expect("Failed to mount accordion");

    enable_raw_mode()?;
    let result = run(&mut widget, &events);
    disable_raw_mode()?;
    result
}

fn run(widget: &mut Accordion<MemoryDom>, events: &EventQueue) -> std::io::Result<()> {
    let mut published: Vec<AccordionEvent> = Vec::new();

    loop {
        draw(widget, &published)?;

        match crossterm::event::read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') => widget.handle_event(&Command::CloseAll),
                    KeyCode::Char('t') => widget.handle_event(&Command::ToggleItem {
                        id: "faq-trigger-2".into(),
                        open: Some(true),
                    }),
                    code => widget.handle_key(code.into(), key_event.modifiers.into()),
                }
            }
            CrosstermEvent::Resize(..) => widget.handle_event(&Command::ViewportResized),
            _ => {}
        }

        published.extend(events.drain());
    }
}

fn draw(widget: &Accordion<MemoryDom>, published: &[AccordionEvent]) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let mut row = 0u16;
    let line = |out: &mut std::io::Stdout, row: &mut u16, text: String| -> std::io::Result<()> {
        execute!(out, cursor::MoveTo(0, *row), Print(text))?;
        *row += 1;
        Ok(())
    };

    line(
        &mut out,
        &mut row,
        "FAQ  (arrows: move, Enter/Space: toggle, c: close all, t: open #3, q: quit)".into(),
    )?;
    row += 1;

    for (i, (question, answer)) in FAQ.iter().enumerate() {
        let item = widget.state().items()[i];
        let indicator = if item.is_expanded { '▼' } else { '▶' };
        let cursor_mark = if widget.state().selected() == Some(i) {
            '>'
        } else {
            ' '
        };
        line(
            &mut out,
            &mut row,
            format!("{cursor_mark} {indicator} {question}"),
        )?;
        if item.is_expanded {
            line(&mut out, &mut row, format!("      {answer}"))?;
        }
    }

    row += 1;
    for event in published.iter().rev().take(3) {
        let text = match event {
            AccordionEvent::ItemOpened { index, .. } => format!("opened item {index}"),
            AccordionEvent::ItemClosed { index, .. } => format!("closed item {index}"),
        };
        line(&mut out, &mut row, text)?;
    }

    Ok(())
}
