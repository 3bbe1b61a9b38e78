use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::domain::email::Email;
use crate::terminal::state::{BoardState, Focus, Pane, Severity};

pub fn render(f: &mut Frame, state: &mut BoardState) {
    let [main, status_area, footer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .margin(1)
            .areas(main);

    let list_border = if state.focus == Focus::List {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let pane_border = if state.focus == Focus::Pane {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    // LEFT: unread list
    let list_title = if state.loading_emails {
        " Unread (loading...) ".to_string()
    } else {
        format!(" Unread ({}) ", state.emails.len())
    };
    let list_block = Block::default()
        .title(list_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(list_border));

    let items: Vec<ListItem> = state
        .emails
        .iter()
        .map(|e| {
            let subj = Span::styled(
                e.subject.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            );
            let from = Span::styled(e.from.clone(), Style::default().fg(Color::Gray));
            let snip = Span::styled(e.snippet.clone(), Style::default().fg(Color::DarkGray));
            ListItem::new(Text::from(vec![
                Line::from(subj),
                Line::from(from),
                Line::from(snip),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(list_block)
        .highlight_symbol("➜ ")
        .highlight_style(Style::default().fg(Color::Green));

    f.render_stateful_widget(list, left, &mut state.list_state);

    // RIGHT: summary or detail, per the pane projection
    let (pane_title, pane_text) = match state.pane() {
        Pane::Summary(text) => (" Summary ", Text::raw(text.to_string())),
        Pane::Detail(email) => (" Email ", detail_text(email)),
        Pane::Empty => (
            " Email ",
            Text::raw(if state.emails.is_empty() {
                "No unread emails found.\nPress r to fetch again."
            } else {
                "Enter: open the selected email\ns: summarize unread emails"
            }),
        ),
    };

    let pane_title = if state.loading_summary {
        " Summary (working...) "
    } else {
        pane_title
    };

    let pane_block = Block::default()
        .title(pane_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pane_border));

    let p = Paragraph::new(pane_text)
        .block(pane_block)
        .wrap(Wrap { trim: false })
        .scroll((state.pane_scroll, 0));

    f.render_widget(p, right);

    // Status line, colored by severity
    if let Some(status) = &state.status {
        let color = match status.severity {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
        };
        let line = Paragraph::new(Span::styled(
            status.text.clone(),
            Style::default().fg(color),
        ));
        f.render_widget(line, status_area);
    }

    // Footer hints
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("j/k", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" open  "),
        Span::styled("s", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" summarize  "),
        Span::styled("S", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" summary view  "),
        Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" reload  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" close  "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ]));
    f.render_widget(hint, footer);
}

fn detail_text(email: &Email) -> Text<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            email.subject.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("From: {}", email.from),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Received: {}", email.received_time),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for body_line in email.text_body.lines() {
        lines.push(Line::from(body_line.to_string()));
    }
    Text::from(lines)
}
