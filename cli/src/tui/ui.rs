use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

const ADD_PROMPT: &str = "Add (NAME DAY HH:MM-HH:MM @LOCATION): ";
const RENAME_PROMPT: &str = "Rename schedule: ";
const HELP_LINE: &str =
    "h/l: Day | j/k: Navigate | a: Add | d: Delete | n: Rename | s: Save | r: Reload | q: Quit";

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Header and Main Content Split
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Input
        ])
        .split(size);

    let header = Paragraph::new(app.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    draw_activity_list(f, app, content_chunks[0]);
    draw_free_slots(f, app, content_chunks[1]);
    draw_footer(f, app, main_chunks[2]);
}

fn draw_activity_list(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app.day_view.activities.iter().map(|activity| {
        Row::new(vec![
            Span::styled(activity.start.clone(), Style::default().fg(Color::Yellow)),
            Span::raw(activity.end.clone()),
            Span::styled(activity.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(activity.location.clone()),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),  // Start
            Constraint::Length(6),  // End
            Constraint::Min(10),    // Name
            Constraint::Length(16), // Location
        ]
    )
    .header(
        Row::new(vec!["Start", "End", "Activity", "Location"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(
        Block::default()
            .title(" Activities ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_free_slots(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app.free_slots.iter().map(|slot| {
        Line::from(vec![
            Span::styled(
                format!("{} - {}", slot.start, slot.end),
                Style::default().fg(Color::Green),
            ),
            Span::styled(format!("  {} min", slot.minutes), Style::default().fg(Color::DarkGray)),
        ])
    }).collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("No free time", Style::default().fg(Color::Red))));
    }

    let booked = app.day_view.booked_minutes();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Booked: ", Style::default().fg(Color::Blue)),
        Span::raw(format!("{}h{:02}m", booked / 60, booked % 60)),
    ]));

    let free_block = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Free 08:00-22:00 ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(free_block, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let prompt = match app.input_mode {
        InputMode::Adding => ADD_PROMPT,
        InputMode::Renaming => RENAME_PROMPT,
        InputMode::Normal => {
            let text = app.status.clone().unwrap_or_else(|| HELP_LINE.to_string());
            let footer = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(footer, area);
            return;
        }
    };

    let input = Paragraph::new(format!("{}{}", prompt, app.input))
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(input, area);

    let before_cursor = &app.input[..app.byte_index(app.cursor_position)];
    let x = area.x + (prompt.width() + before_cursor.width()) as u16;
    f.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
}
