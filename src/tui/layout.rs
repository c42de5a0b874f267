use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::{FormField, ItemForm, Mode, TuiApp};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Items
            Constraint::Length(4), // Location
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_items_pane(frame, app, chunks[0], colors);
    render_location_pane(frame, app, chunks[1], colors);
    render_status_bar(frame, app, chunks[2], colors);

    if let Mode::Adding(form) = &app.mode {
        render_add_dialog(frame, form, colors);
    }
}

fn render_items_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let editing_form = match &app.mode {
        Mode::Editing { form, .. } => Some(form),
        _ => None,
    };

    let items: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .map(|item| {
            if item.is_editing {
                if let Some(form) = editing_form {
                    let style = Style::default()
                        .fg(colors.editing_item)
                        .add_modifier(Modifier::BOLD);
                    return ListItem::new(vec![
                        Line::from(Span::styled(
                            format!("✎ {}", field_text(form, FormField::Name)),
                            style,
                        )),
                        Line::from(Span::styled(
                            format!("  Qty: {}", field_text(form, FormField::Quantity)),
                            style,
                        )),
                    ]);
                }
            }

            ListItem::new(vec![
                Line::from(format!("#{:<3} {}  (Qty: {})", item.id, item.name, item.quantity)),
                Line::from(Span::styled(
                    format!("     Address: {}", item.display_address()),
                    Style::default().fg(colors.address),
                )),
            ])
        })
        .collect();

    let title = format!(" Shopping list ({}) ", app.store.len());
    let is_active = app.mode == Mode::Browse;
    let border_style = if is_active {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_location_pane(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let position = app
        .location
        .location()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let address = if app.is_looking_up() {
        "looking up...".to_string()
    } else if app.store.ambient_address().is_empty() {
        "(none)".to_string()
    } else {
        app.store.ambient_address().to_string()
    };

    let lines = vec![
        Line::from(format!(
            "Position: {}   Permission: {:?}",
            position, app.location.permission
        )),
        Line::from(Span::styled(
            format!("Address for new items: {}", address),
            Style::default().fg(colors.address),
        )),
    ];

    let block = Block::default()
        .title(" Location ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.inactive_border));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_add_dialog(frame: &mut Frame, form: &ItemForm, colors: &ColorConfig) {
    let area = centered_rect(50, 7, frame.area());
    let lines = vec![
        Line::from(format!("Name:     {}", field_text(form, FormField::Name))),
        Line::from(format!("Quantity: {}", field_text(form, FormField::Quantity))),
        Line::from(""),
        Line::from("Enter:Add  Tab:Next field  Esc:Cancel"),
    ];

    let block = Block::default()
        .title(" Add Shopping Item ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Mode::ConfirmDelete { ref name, .. } = app.mode {
        format!("Delete \"{}\"? (y/n)", name)
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if let Mode::Editing { .. } = app.mode {
        "Tab:Next field  Enter:Save".to_string()
    } else {
        "j/k:Nav  a:Add  e:Edit  d:Delete  l:Locate  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

/// Field text with a cursor marker on the focused field.
fn field_text(form: &ItemForm, field: FormField) -> String {
    let value = match field {
        FormField::Name => &form.name,
        FormField::Quantity => &form.quantity,
    };
    if form.focus == field {
        format!("{}_", value)
    } else {
        value.clone()
    }
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}
