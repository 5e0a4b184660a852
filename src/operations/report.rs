use crate::display::{format_currency, format_percentage};
use crate::error::TrackerError;
use crate::models::transaction::Transaction;
use crate::summary::{CategoryShare, Totals, category_breakdown, totals};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::{Alignment, Color, Constraint, Direction, Layout, Modifier, Rect, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::prelude::ToPrimitive;
use std::io;

const CATEGORY_WIDTH: usize = 15;
// category + amount + percentage columns and the gaps between them
const FIXED_COLUMNS: usize = CATEGORY_WIDTH + 1 + 12 + 1 + 7 + 2;

pub struct ReportData {
    totals: Totals,
    breakdown: Vec<CategoryShare>,
}

pub fn build_report(transactions: &[Transaction]) -> ReportData {
    ReportData {
        totals: totals(transactions),
        breakdown: category_breakdown(transactions),
    }
}

/// Shows balance and expense breakdown full screen until `q` or Esc.
pub fn run_report(transactions: &[Transaction]) -> Result<(), TrackerError> {
    let report = build_report(transactions);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = (|| -> io::Result<()> {
        let backend = ratatui::backend::CrosstermBackend::new(io::stdout());
        let mut terminal = ratatui::Terminal::new(backend)?;

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                render_report(frame, area, &report);
            })?;

            if event::poll(std::time::Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Press => {}
                    Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => break,
                    _ => {}
                }
            }
        }
        Ok(())
    })();

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    Ok(result?)
}

pub fn render_report(frame: &mut ratatui::Frame, area: Rect, data: &ReportData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_totals(frame, layout[0], &data.totals);
    render_breakdown(frame, layout[1], &data.breakdown);
}

fn render_totals(frame: &mut ratatui::Frame, area: Rect, totals: &Totals) {
    let block = Block::default()
        .title("Balance  (press q to exit)")
        .borders(Borders::ALL);

    let balance_color = if totals.balance.is_sign_negative() && !totals.balance.is_zero() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Balance: "),
            Span::styled(
                format_currency(totals.balance),
                Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Income:  "),
            Span::styled(format_currency(totals.income), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Expense: "),
            Span::styled(format_currency(totals.expense), Style::default().fg(Color::Red)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_breakdown(frame: &mut ratatui::Frame, area: Rect, breakdown: &[CategoryShare]) {
    let block = Block::default()
        .title("Expenses by Category")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if breakdown.is_empty() {
        let empty = Paragraph::new("No expenses recorded").alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let bar_width = (inner.width as usize).saturating_sub(FIXED_COLUMNS);
    let lines: Vec<Line> = breakdown
        .iter()
        .enumerate()
        .map(|(idx, share)| {
            let color = category_color(idx);
            let filled = bar_length(share, bar_width);
            Line::from(vec![
                Span::styled(
                    format!("{:width$}", share.category, width = CATEGORY_WIDTH),
                    Style::default().fg(color),
                ),
                Span::raw(" "),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::raw(" ".repeat(bar_width - filled)),
                Span::raw(" "),
                Span::raw(format!("{:>12}", format_currency(share.amount))),
                Span::raw(" "),
                Span::raw(format!("{:>7}", format_percentage(share.percentage))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn bar_length(share: &CategoryShare, bar_width: usize) -> usize {
    let ratio = share.percentage.to_f64().unwrap_or(0.0) / 100.0;
    ((ratio * bar_width as f64).round() as usize).min(bar_width)
}

fn category_color(idx: usize) -> Color {
    const PALETTE: [Color; 8] = [
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::LightCyan,
        Color::LightMagenta,
    ];
    PALETTE[idx % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TransactionType;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use rust_decimal::Decimal;

    fn create_test_transaction(transaction_type: TransactionType, category: &str, amount: i64) -> Transaction {
        Transaction {
            id: category.to_lowercase(),
            transaction_type,
            category: category.to_string(),
            amount: Decimal::from(amount),
            description: String::new(),
            date: "2025-01-15".to_string(),
        }
    }

    fn render_to_string(transactions: &[Transaction]) -> String {
        let report = build_report(transactions);
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_report(frame, area, &report);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_report_with_expenses() {
        let transactions = vec![
            create_test_transaction(TransactionType::Income, "Salary", 1000),
            create_test_transaction(TransactionType::Expense, "Food", 60),
            create_test_transaction(TransactionType::Expense, "Transport", 40),
        ];

        let screen = render_to_string(&transactions);
        assert!(screen.contains("₹1,000.00"));
        assert!(screen.contains("₹900.00"));
        assert!(screen.contains("Food"));
        assert!(screen.contains("Transport"));
        assert!(screen.contains("60.0%"));
        assert!(screen.contains("█"));
    }

    #[test]
    fn test_render_report_without_expenses() {
        let screen = render_to_string(&[]);
        assert!(screen.contains("₹0.00"));
        assert!(screen.contains("No expenses recorded"));
    }

    #[test]
    fn test_bar_length() {
        let share = CategoryShare {
            category: "Food".to_string(),
            amount: Decimal::from(60),
            percentage: Decimal::from(60),
        };
        assert_eq!(bar_length(&share, 10), 6);
        assert_eq!(bar_length(&share, 0), 0);
    }
}
