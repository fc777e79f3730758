use crate::ui::app::{App, ButtonFocus, SettingsRow};
use crate::ui::dialog::{CountField, DescriptionField, SettingField};
use crate::ui::footer::Footer;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::presenter::{DialogKind, SettingsPresenter};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, LABEL_TEXT, POPUP_BORDER, SNACKBAR_BG,
    SNACKBAR_TEXT, TITLE_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let presenter = app.presenter();

    let title = Paragraph::new(Line::from(Span::styled(
        "Settings",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(title, regions.title);

    frame.render_widget(Paragraph::new(settings_rows(app)), regions.rows);

    if let Some(message) = presenter.snackbar().visible() {
        let snackbar = Paragraph::new(format!(" {message}"))
            .style(Style::default().fg(SNACKBAR_TEXT).bg(SNACKBAR_BG));
        frame.render_widget(snackbar, regions.snackbar);
    }

    let footer = Footer::new(app.dialog_open());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    if let Some(kind) = presenter.active_dialog() {
        draw_dialog(frame, app, kind);
    }
}

fn settings_rows(app: &App) -> Vec<Line<'static>> {
    let settings = app.presenter().settings();
    let mut lines = Vec::new();
    for row in SettingsRow::ALL {
        let (title, value) = match row {
            SettingsRow::Count => (CountField::TITLE, CountField::display(&settings.count)),
            SettingsRow::Description => (
                DescriptionField::TITLE,
                DescriptionField::display(&settings.description),
            ),
        };
        let focused = row == app.focused_row();
        let marker = if focused { "› " } else { "  " };
        let base = if focused {
            Style::default().bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, base.fg(ACCENT)),
            Span::styled(title, base.fg(LABEL_TEXT)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ", base),
            Span::styled(value, base.fg(BODY_TEXT)),
        ]));
        lines.push(Line::from(""));
    }
    lines
}

fn draw_dialog(frame: &mut Frame<'_>, app: &App, kind: DialogKind) {
    let presenter = app.presenter();
    let (title, mut lines) = match kind {
        DialogKind::Count => (CountField::TITLE, count_choice_lines(presenter)),
        DialogKind::Description => (DescriptionField::TITLE, description_lines(presenter)),
    };
    lines.push(Line::from(""));
    lines.push(button_line(app));

    // Borders plus one blank line above the content.
    let height = lines.len() as u16 + 3;
    let area = centered_rect_by_size(DIALOG_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Rect {
        y: inner.y.saturating_add(1).min(inner.y + inner.height),
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), body);
}

fn count_choice_lines(presenter: &SettingsPresenter) -> Vec<Line<'static>> {
    let selected = presenter.selected_count_choice();
    presenter
        .count_choices()
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let is_selected = selected == Some(index);
            let (radio, style) = if is_selected {
                ("(•)", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                ("( )", Style::default().fg(BODY_TEXT))
            };
            Line::from(vec![
                Span::styled(format!("  {radio}   "), style),
                Span::styled(choice.to_string(), style),
            ])
        })
        .collect()
}

fn description_lines(presenter: &SettingsPresenter) -> Vec<Line<'static>> {
    let draft = presenter.description_dialog().current().clone();
    vec![
        Line::from(Span::styled(
            "  Description",
            Style::default().fg(LABEL_TEXT),
        )),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                format!("{draft}▏"),
                Style::default().fg(TITLE_TEXT).bg(ACTIVE_HIGHLIGHT),
            ),
        ]),
    ]
}

fn button_line(app: &App) -> Line<'static> {
    let focused = Style::default()
        .fg(TITLE_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    let normal = Style::default().fg(ACCENT);

    let mut spans = Vec::new();
    if let Some(cancel) = app.cancel_label() {
        let style = if app.button_focus() == ButtonFocus::Cancel {
            focused
        } else {
            normal
        };
        spans.push(Span::styled(format!(" {cancel} "), style));
        spans.push(Span::raw("  "));
    }
    let style = if app.button_focus() == ButtonFocus::Confirm {
        focused
    } else {
        normal
    };
    spans.push(Span::styled(format!(" {} ", app.confirm_label()), style));
    spans.push(Span::raw(" "));
    Line::from(spans).alignment(Alignment::Right)
}
