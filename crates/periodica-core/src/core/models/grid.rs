use super::element::{Category, Element};
use serde::Serialize;

/// Row of the detached lanthanide strip below the main table.
pub const LANTHANIDE_ROW: u8 = 9;
/// Row of the detached actinide strip below the main table.
pub const ACTINIDE_ROW: u8 = 10;
pub const GRID_COLUMNS: u8 = 18;
pub const GRID_ROWS: u8 = 10;

const LANTHANUM: u32 = 57;
const ACTINIUM: u32 = 89;
const F_STRIP_FIRST_COLUMN: u8 = 3;
const F_STRIP_WIDTH: u32 = 15;

/// A fixed cell in the 18-column periodic table layout (1-based).
///
/// Rows 1 through 7 are the periods, columns are the groups. Lanthanides and
/// actinides occupy rows 9 and 10 starting under group 3; row 8 is the visual
/// gap between the main body and the f-block strips. Positions are a function
/// of the element alone so filtering never reflows the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    pub row: u8,
    pub column: u8,
}

impl GridPosition {
    /// Returns `None` only for records that cannot be placed: an element with
    /// no group outside the f-block strips, or an f-block element whose atomic
    /// number falls outside its strip.
    pub fn of(element: &Element) -> Option<Self> {
        if let Some(group) = element.group {
            if (1..=GRID_COLUMNS).contains(&group) && (1..=7).contains(&element.period) {
                return Some(Self {
                    row: element.period,
                    column: group,
                });
            }
            return None;
        }

        let (row, first) = match element.category {
            Category::Lanthanide => (LANTHANIDE_ROW, LANTHANUM),
            Category::Actinide => (ACTINIDE_ROW, ACTINIUM),
            _ => return None,
        };
        let offset = element.atomic_number.checked_sub(first)?;
        if offset >= F_STRIP_WIDTH {
            return None;
        }
        Some(Self {
            row,
            column: F_STRIP_FIRST_COLUMN + offset as u8,
        })
    }
}
