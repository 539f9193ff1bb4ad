//! Drawing for the intro, countdown, and finish screens.
//!
//! Every screen fills the whole terminal with one background color and
//! stacks its lines in the vertical center.

use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use workout_core::{format_duration, CountdownView, Rgb, Settings, WorkoutPlan};

/// 3x5 glyphs for the countdown digits, `#` is a filled cell
const DIGITS: [[&str; 5]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    [" # ", "## ", " # ", " # ", "###"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn screen_style(background: Rgb, foreground: Rgb) -> Style {
    Style::default().fg(color(foreground)).bg(color(background))
}

fn bold(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), Style::default().add_modifier(Modifier::BOLD))
}

/// Render digits as block letters, one string per row
pub fn big_digits(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect();

    (0..5)
        .map(|row| {
            glyphs
                .iter()
                .map(|glyph| {
                    glyph[row]
                        .chars()
                        .map(|cell| if cell == '#' { "██" } else { "  " })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

fn draw_centered(frame: &mut Frame, style: Style, lines: Vec<Line<'static>>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(style), area);

    let height = (lines.len() as u16).min(area.height);
    let [body] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(paragraph, body);
}

pub fn draw_intro(frame: &mut Frame, plan: &WorkoutPlan, settings: &Settings) {
    let mut lines = vec![bold(settings.headline()), Line::default()];
    lines.extend(plan.moves().iter().map(|m| Line::from(m.clone())));
    lines.push(Line::from(format!(
        "duration: {}",
        format_duration(settings.total_duration())
    )));
    lines.push(Line::default());
    lines.push(bold("press a key to start!"));

    draw_centered(frame, screen_style(Rgb::WHITE, Rgb::WHITE.foreground()), lines);
}

pub fn draw_countdown(frame: &mut Frame, view: &CountdownView) {
    let mut lines = vec![Line::from(view.header.clone()), Line::default()];
    lines.push(bold(view.title.clone()));
    lines.push(Line::default());
    lines.extend(big_digits(&view.timer).into_iter().map(Line::from));
    lines.push(Line::default());
    if view.paused {
        lines.push(bold("<PAUSED>"));
    }
    if let Some(next) = &view.next {
        lines.push(Line::from(next.clone()));
    }

    draw_centered(frame, screen_style(view.background, view.foreground), lines);
}

pub fn draw_finish(frame: &mut Frame) {
    draw_centered(
        frame,
        screen_style(Rgb::WHITE, Rgb::WHITE.foreground()),
        vec![bold("all done!"), Line::default(), bold("nice job!")],
    );
}
