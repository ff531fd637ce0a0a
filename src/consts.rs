/// Smallest valid minute
pub const MIN_MINUTE: u32 = 0;
/// Largest valid minute
pub const MAX_MINUTE: u32 = 59;

/// Smallest valid hour
pub const MIN_HOUR: u32 = 0;
/// Largest valid hour
pub const MAX_HOUR: u32 = 23;

/// First day of month
pub const MIN_DAY_OF_MONTH: u32 = 1;
/// Last possible day of any month
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// Month number for January
pub const MIN_MONTH: u32 = 1;
/// Month number for December
pub const MAX_MONTH: u32 = 12;

/// Sunday
pub const MIN_DAY_OF_WEEK: u32 = 0;
/// Saturday
pub const MAX_DAY_OF_WEEK: u32 = 6;

/// Number of schedule fields in an expression
pub const FIELD_COUNT: usize = 5;

/// Number of positional arguments making up an expression: the fields plus the command
pub const ARG_COUNT: usize = FIELD_COUNT + 1;

/// Column width the field name is padded to when rendering
pub const NAME_WIDTH: usize = 14;

/// Matches every value in the field's bound
pub const ANY: char = '*';
/// Separates groups within a field
pub const GROUP_SEPARATOR: char = ',';
/// Separates the start and end of an interval
pub const RANGE_SEPARATOR: char = '-';
/// Introduces a step size
pub const STEP_SEPARATOR: char = '/';
