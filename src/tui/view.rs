use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::summarizer::Precision;
use crate::tui::{App, NoticeKind, Screen};

/// Render the current screen, with the notice overlay on top if one is up.
pub fn render(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Main => render_main(f, app, f.area()),
        Screen::FilePicker => render_picker(f, app, f.area()),
    }
    if let Some(notice) = &app.notice {
        render_notice(f, notice);
    }
}

fn render_main(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // selected file
        Constraint::Length(1), // precision
        Constraint::Length(1), // model
        Constraint::Min(5),    // summary output
        Constraint::Length(1), // footer
    ])
    .split(area);

    let header = Line::from(Span::styled(
        " pdfgist — AI PDF Summarizer (demo) ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(header), chunks[0]);

    let file_text = app
        .session
        .pdf_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none — press 'o' to browse)".to_string());
    let file_line = Line::from(vec![
        Span::styled(" PDF File: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(file_text),
    ]);
    f.render_widget(Paragraph::new(file_line), chunks[1]);

    // Precision rendered as a radio row, current level highlighted
    let mut precision_spans = vec![Span::styled(
        " Precision: ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (i, level) in Precision::ALL.iter().enumerate() {
        let marker = if *level == app.session.precision {
            "(•)"
        } else {
            "( )"
        };
        let style = if *level == app.session.precision {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        precision_spans.push(Span::styled(
            format!("{marker} {} [{}]  ", level.label(), i + 1),
            style,
        ));
    }
    f.render_widget(Paragraph::new(Line::from(precision_spans)), chunks[2]);

    let model_line = Line::from(vec![
        Span::styled(" AI Model: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            app.session.model.clone(),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  (m cycles)", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(model_line), chunks[3]);

    let summary_text = app
        .summary
        .as_deref()
        .unwrap_or("Select a PDF and press Enter to summarize.");
    let output = Paragraph::new(summary_text)
        .wrap(Wrap { trim: false })
        .scroll((app.summary_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Summary Output "),
        );
    f.render_widget(output, chunks[4]);

    let footer = Line::from(Span::styled(
        " o:browse  Enter/s:summarize  1/2/3:precision  m:model  j/k:scroll  q:quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(footer), chunks[5]);
}

fn render_picker(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // current dir
        Constraint::Min(5),    // file list
        Constraint::Length(1), // footer
    ])
    .split(area);

    let header = Line::from(Span::styled(
        " Select a PDF file ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(header), chunks[0]);

    let dir_line = Line::from(Span::styled(
        format!(" {}", app.picker.current_dir.display()),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(dir_line), chunks[1]);

    let visible_height = chunks[2].height.saturating_sub(2) as usize; // borders
    let scroll_offset = if app.picker.cursor >= visible_height && visible_height > 0 {
        app.picker.cursor - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = app
        .picker
        .entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height.max(1))
        .map(|entry| {
            let (prefix, style) = if entry.is_dir {
                ("/ ", Style::default().fg(Color::Cyan))
            } else if entry.is_pdf {
                ("  ", Style::default().fg(Color::White))
            } else {
                ("  ", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(&entry.name, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Files "))
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.picker.cursor.saturating_sub(scroll_offset)));
    f.render_stateful_widget(list, chunks[2], &mut state);

    let footer = Line::from(Span::styled(
        " j/k:navigate  Enter:open dir / select PDF  g/G:top/bottom  Esc:cancel  q:quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(footer), chunks[3]);
}

fn render_notice(f: &mut Frame, notice: &crate::tui::Notice) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let border_color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let body = Paragraph::new(notice.text.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} — Enter/Esc to dismiss ", notice.title)),
        );
    f.render_widget(body, area);
}

/// Centered rectangle taking the given percentages of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}
