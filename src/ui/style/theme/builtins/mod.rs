mod light;
mod slate;
mod solarized;

use super::types::ThemeDefinition;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    light::DEFINITION,
    slate::DEFINITION,
    solarized::DEFINITION,
];

pub(super) const DEFAULT: ThemeDefinition = slate::DEFINITION;
