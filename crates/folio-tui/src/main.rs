//! Folio TUI - the public portfolio showcase
//!
//! Read-only view over the project catalog:
//! - hero header with the site title and tagline
//! - category tabs with a filtered project list
//! - detail view for the selected project
//! - about/contact footer

mod app;

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::catalog::Catalog;
use folio_core::config::Config;
use folio_core::storage::SnapshotStore;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Terminal,
};

use app::{App, View};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let catalog = Catalog::load(SnapshotStore::open_default()?);
    let app = App::new(catalog, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> anyhow::Result<()> {
    let mut list_state = ListState::default();

    loop {
        list_state.select(Some(app.cursor));
        terminal.draw(|frame| match app.view {
            View::List => draw_list(frame, &app, &mut list_state),
            View::Detail => draw_detail(frame, &app),
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.view {
                    View::List => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.prev_category(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_category(),
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Enter => app.open_detail(),
                        _ => {}
                    },
                    View::Detail => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
                        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
                        _ => {}
                    },
                }
            }
        }
    }
}

fn accent(app: &App) -> Color {
    if app.config.display.dark_mode {
        Color::Cyan
    } else {
        Color::Blue
    }
}

fn draw_list(frame: &mut ratatui::Frame, app: &App, list_state: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Length(3), // Category tabs
            Constraint::Min(6),    // Project list
            Constraint::Length(4), // About / contact
            Constraint::Length(3), // Key hints
        ])
        .split(frame.area());

    // Hero header
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            app.config.site.title.clone(),
            Style::default().fg(accent(app)).add_modifier(Modifier::BOLD),
        )),
        Line::from(app.config.site.tagline.clone()),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hero, chunks[0]);

    // Category tabs
    let titles: Vec<Line> = app
        .categories()
        .iter()
        .map(|c| Line::from(c.clone()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.category_index)
        .highlight_style(Style::default().fg(accent(app)).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Categories"));
    frame.render_widget(tabs, chunks[1]);

    // Project list
    let tags_shown = app.config.display.tags_shown;
    let items: Vec<ListItem> = app
        .visible()
        .iter()
        .map(|project| {
            let featured = if project.featured { " *" } else { "" };
            let title_line = Line::from(vec![
                Span::styled(
                    project.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(featured, Style::default().fg(Color::Yellow)),
            ]);
            let description_line = Line::from(format!("  {}", project.description));
            let tags_line = Line::from(Span::styled(
                format!("  {}", project.display_tags(tags_shown).join(" · ")),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(vec![title_line, description_line, tags_line])
        })
        .collect();
    let count = items.len();
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Projects ({})", count)),
        );
    frame.render_stateful_widget(list, chunks[2], list_state);

    // About / contact
    let mut about_lines = vec![Line::from(app.config.site.about.clone())];
    if !app.config.site.contact_email.is_empty() {
        about_lines.push(Line::from(format!("Contact: {}", app.config.site.contact_email)));
    }
    let about = Paragraph::new(about_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("About"));
    frame.render_widget(about, chunks[3]);

    // Key hints
    let footer = Paragraph::new("q: Quit | left/right: Category | up/down: Move | Enter: Details")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[4]);
}

fn draw_detail(frame: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Key hints
        ])
        .split(frame.area());

    let Some(project) = app.open_project() else {
        // Selection vanished out from under the view
        let empty = Paragraph::new("Project no longer available. Press Esc to go back.")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, chunks[1]);
        return;
    };

    let featured = if project.featured { "  * featured" } else { "" };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default().fg(accent(app)).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}{}", project.category, featured)),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let mut body = vec![Line::from(project.description.clone()), Line::from("")];
    if let Some(long) = &project.long_description {
        if !long.is_empty() {
            body.push(Line::from(long.clone()));
            body.push(Line::from(""));
        }
    }
    if !project.tags.is_empty() {
        body.push(Line::from(format!("Tags: {}", project.tags.join(", "))));
    }
    if let Some(repo) = &project.repo_url {
        body.push(Line::from(format!("Source: {}", repo)));
    }
    if let Some(live) = &project.live_url {
        body.push(Line::from(format!("Live: {}", live)));
    }
    let detail = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Details"));
    frame.render_widget(detail, chunks[1]);

    let footer = Paragraph::new("Esc: Back | up/down: Scroll | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}
