use tui::Frame;
use tui::Terminal;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use cfb_data::{GameRecord, SeasonType, kickoff};

static TABS: &[&str; 3] = &["Timeline", "Matchup", "Data"];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
            }

            let mut main = layout.main;
            if app.state.show_logs && main.height > 12 {
                let [content, logs] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(10)]).areas(main);
                main = content;
                draw_logs(f, logs);
            }

            match app.state.active_tab {
                MenuItem::Timeline => draw_timeline(f, main, app),
                MenuItem::Matchup => draw_matchup(f, main, app),
                MenuItem::Data => draw_data(f, main, app),
                MenuItem::Help => draw_placeholder(
                    f,
                    main,
                    "Help: q=quit  1=Timeline  2=Matchup  3=Data  h/l=week  g/G=first/last  space=auto-scroll  s=speed  f=flip  j/k=scroll  F=full screen",
                ),
            }

            if !app.settings.full_screen {
                draw_status_bar(f, layout.status_bar, app);
            }

            draw_loading_spinner(f, f.area(), app, loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Timeline => 0,
        MenuItem::Matchup => 1,
        MenuItem::Data => 2,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

/// Shared fallback for the three data-bearing views while the snapshot is
/// missing: a persistent load error, or the loading placeholder.
fn draw_unavailable(f: &mut Frame, area: Rect, app: &App) {
    let msg = if let Some(err) = app.state.last_error.as_deref() {
        format!("Season data load failed:\n{err}")
    } else {
        "Loading game data...".to_string()
    };
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_timeline(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Timeline ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.state.timeline.dataset.is_none() {
        draw_unavailable(f, inner, app);
        return;
    }

    let [header, key_legend, content] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new("Lineal champion, season by season — each cell is one title game"),
        header,
    );
    f.render_widget(
        Paragraph::new("Keys: h/l=week  j/k=scroll seasons  g/G=first/last  Enter tabs with 1/2/3")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let selected_week = app.state.timeline.selected_week;
    let offset = app.state.timeline.scroll_offset as usize;
    let visible = content.height as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (season, rows) in app.state.timeline.season_rows.iter().skip(offset).take(visible) {
        let mut spans = vec![Span::styled(
            format!("{season:>5} "),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )];

        for row in rows {
            let style = if row.total_week == selected_week {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if row.season_type == SeasonType::Postseason {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(cell_label(&row.winner_name), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), content);
}

/// Compact timeline cell: first four alphanumeric characters of the winner
/// name, upper-cased and padded so every cell lines up.
fn cell_label(name: &str) -> String {
    let mut label: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(4)
        .collect::<String>()
        .to_ascii_uppercase();
    while label.len() < 4 {
        label.push(' ');
    }
    label
}

fn rank_label(rank: Option<u16>) -> String {
    rank.map_or_else(|| "NR".to_string(), |r| format!("#{r}"))
}

fn draw_matchup(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Matchup ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.state.timeline.dataset.is_none() {
        draw_unavailable(f, inner, app);
        return;
    }

    let Some(game) = app.state.timeline.selected_game() else {
        draw_empty_week(f, inner, app.state.timeline.selected_week);
        return;
    };

    let lines = matchup_lines(game);
    let offset = app.state.detail.scroll_offset as usize;
    let visible = inner.height as usize;
    let window: Vec<Line> = lines.into_iter().skip(offset).take(visible).collect();
    f.render_widget(Paragraph::new(window), inner);
}

fn matchup_lines(game: &GameRecord) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(notes) = game.notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(Line::from(Span::styled(
            notes.to_owned(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }

    let mut badge = format!("{} | {}", game.season, game.season_type.label());
    if game.season_type == SeasonType::Regular {
        badge.push_str(&format!(" | Week {}", game.week));
    }
    lines.push(Line::from(badge));
    lines.push(Line::from(Span::styled(
        kickoff::format_kickoff(game),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("Score  {} - {}", game.home_points, game.away_points),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.extend(team_lines("Home", true, game));
    lines.extend(team_lines("Away", false, game));

    lines.extend(line_score_table(game));

    lines.push(Line::from(Span::styled(
        "— GAME INFO —",
        Style::default().fg(Color::DarkGray),
    )));
    if let Some(venue_line) = venue_line(game) {
        lines.push(Line::from(venue_line));
    }
    let mut badges: Vec<Span> = Vec::new();
    if game.neutral_site {
        badges.push(Span::styled("[Neutral Site] ", Style::default().fg(Color::Yellow)));
    }
    if game.conference_game {
        badges.push(Span::styled("[Conference] ", Style::default().fg(Color::Yellow)));
    } else if game.season_type == SeasonType::Regular {
        badges.push(Span::styled("[Non-Conference] ", Style::default().fg(Color::Cyan)));
    }
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }

    if let Some(url) = game.highlight_url() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Highlights: ", Style::default().fg(Color::Gray)),
            Span::styled(url, Style::default().fg(Color::Blue)),
        ]));
    }

    lines
}

fn team_lines(side: &'static str, home: bool, game: &GameRecord) -> Vec<Line<'static>> {
    let (team, conference, ap, coaches) = if home {
        (&game.home_team, &game.home_conference, game.home_ap_rank, game.home_coaches_rank)
    } else {
        (&game.away_team, &game.away_conference, game.away_ap_rank, game.away_coaches_rank)
    };
    let won = game.winner_is_home() == home;

    let mut title = vec![
        Span::styled(format!("{side:<5} "), Style::default().fg(Color::Gray)),
        Span::styled(
            team.clone(),
            if won {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            },
        ),
    ];
    if let Some(conference) = conference.as_deref() {
        title.push(Span::styled(
            format!("  ({conference})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if won {
        title.push(Span::styled("  ◀ winner", Style::default().fg(Color::Green)));
    }

    vec![
        Line::from(title),
        Line::from(Span::styled(
            format!("      AP: {}  Coaches: {}", rank_label(ap), rank_label(coaches)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

/// Per-quarter score table. Column count follows the longer of the two
/// line-score sequences (overtime adds columns).
fn line_score_table(game: &GameRecord) -> Vec<Line<'static>> {
    let periods = game.home_line_scores.len().max(game.away_line_scores.len());
    if periods == 0 {
        return Vec::new();
    }

    let mut header = String::from("      ");
    for q in 1..=periods {
        header.push_str(&format!("{:>4}", format!("Q{q}")));
    }
    header.push_str(&format!("{:>5}", "T"));

    let row = |label: &str, scores: &[u16], total: u16| {
        let mut line = format!("{label:<6}");
        for q in 0..periods {
            match scores.get(q) {
                Some(points) => line.push_str(&format!("{points:>4}")),
                None => line.push_str(&format!("{:>4}", "-")),
            }
        }
        line.push_str(&format!("{total:>5}"));
        line
    };

    vec![
        Line::from(Span::styled(header, Style::default().fg(Color::DarkGray))),
        Line::from(row("Home", &game.home_line_scores, game.home_points)),
        Line::from(row("Away", &game.away_line_scores, game.away_points)),
        Line::from(""),
    ]
}

fn venue_line(game: &GameRecord) -> Option<String> {
    if game.venue.is_none() && game.city.is_none() && game.state.is_none() {
        return None;
    }
    let venue = game.venue.as_deref().unwrap_or("Unknown venue");
    match (game.city.as_deref(), game.state.as_deref()) {
        (Some(city), Some(state)) => Some(format!("{venue} in {city}, {state}")),
        (Some(city), None) => Some(format!("{venue} in {city}")),
        (None, Some(state)) => Some(format!("{venue} in {state}")),
        (None, None) => Some(venue.to_owned()),
    }
}

fn draw_empty_week(f: &mut Frame, area: Rect, week: u32) {
    f.render_widget(
        Paragraph::new(format!("No game recorded for week {week}"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_data(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Game Data ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.state.timeline.dataset.is_none() {
        draw_unavailable(f, inner, app);
        return;
    }

    let Some(game) = app.state.timeline.selected_game() else {
        draw_empty_week(f, inner, app.state.timeline.selected_week);
        return;
    };

    let raw = serde_json::to_string_pretty(game)
        .unwrap_or_else(|e| format!("record not serializable: {e}"));
    let offset = app.state.detail.scroll_offset as usize;
    let visible = inner.height as usize;
    let window: Vec<Line> = raw
        .lines()
        .skip(offset)
        .take(visible)
        .map(|l| Line::from(l.to_owned()))
        .collect();
    f.render_widget(Paragraph::new(window).style(Style::default().fg(Color::Gray)), inner);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let timeline = &app.state.timeline;
    let nav = &app.state.nav;

    let position = format!(
        " Game {} of {} ",
        timeline.selected_week + 1,
        timeline.max_week + 1
    );
    let auto = if nav.auto_scrolling {
        Span::styled(
            format!("▶ auto ({})", nav.tick_speed.label()),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled(
            format!("⏸ paused ({})", nav.tick_speed.label()),
            Style::default().fg(Color::DarkGray),
        )
    };

    let line = Line::from(vec![
        Span::styled(position, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("| "),
        auto,
        Span::styled(
            "  space=auto  s=speed  h/l=week  f=flip  ?=help  q=quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(widget, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
