//! Presentation contract: what each `UiState` looks like.
//!
//! # Design
//! Rendering is a pure function of state. `render` produces a `View` value
//! a host can draw however it likes; `Presenter` is the callback form for
//! hosts that prefer one render function per variant. Neither holds or
//! mutates view-model state.

use std::fmt;

use crate::state::UiState;
use crate::types::NotaTarea;

pub const ERROR_MESSAGE: &str = "Failed to load";
pub const RETRY_LABEL: &str = "Retry";

/// Adaptive grid: as many columns as fit at `min_cell_width` each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub min_cell_width: u32,
    pub padding: u32,
    pub aspect_ratio: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            min_cell_width: 150,
            padding: 4,
            aspect_ratio: 1.5,
        }
    }
}

impl GridLayout {
    pub fn columns_for(&self, available_width: u32) -> u32 {
        (available_width / self.min_cell_width.max(1)).max(1)
    }
}

/// One grid cell. Only the title is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u64,
    pub title: String,
}

impl From<&NotaTarea> for Card {
    fn from(nota: &NotaTarea) -> Self {
        Self {
            id: nota.id,
            title: nota.titulo.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Grid { layout: GridLayout, cards: Vec<Card> },
    Error { message: &'static str, retry_label: &'static str },
}

pub fn render(state: &UiState) -> View {
    match state {
        UiState::Loading => View::Loading,
        UiState::Success(notas) => View::Grid {
            layout: GridLayout::default(),
            cards: notas.iter().map(Card::from).collect(),
        },
        UiState::Error => View::Error {
            message: ERROR_MESSAGE,
            retry_label: RETRY_LABEL,
        },
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => write!(f, "Loading..."),
            View::Grid { cards, .. } if cards.is_empty() => write!(f, "(no notes)"),
            View::Grid { cards, .. } => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[{}] {}", card.id, card.title)?;
                }
                Ok(())
            }
            View::Error {
                message,
                retry_label,
            } => write!(f, "{message} [{retry_label}]"),
        }
    }
}

/// One render function per state variant.
pub trait Presenter {
    type Output;

    fn loading(&mut self) -> Self::Output;
    fn grid(&mut self, notas: &[NotaTarea]) -> Self::Output;
    /// `retry` must be invoked from a user-actionable control.
    fn error(&mut self, retry: &dyn Fn()) -> Self::Output;
}

impl UiState {
    pub fn present<P: Presenter>(&self, presenter: &mut P, retry: &dyn Fn()) -> P::Output {
        match self {
            UiState::Loading => presenter.loading(),
            UiState::Success(notas) => presenter.grid(notas),
            UiState::Error => presenter.error(retry),
        }
    }
}
