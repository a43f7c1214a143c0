//! Preset payloads for the skeleton's files, grouped by directory.
//!
//! The text is opaque to the rest of the crate — the tree walks never
//! inspect it.

pub const INDEX: &str = r#"@use 'abstracts/variables';
@use 'abstracts/mixins';
@use 'base/reset';
@use 'base/fonts';
@use 'base/tags';
@use 'components/button';
@use 'layout/header';
@use 'layout/footer';
"#;

pub mod abstracts {
    pub const VARIABLES: &str = r#"// Color palette
$color-primary: #3273dc;
$color-text: #363636;
$color-background: #ffffff;

// Spacing scale
$spacing-unit: 0.5rem;

// Breakpoints
$breakpoint-tablet: 768px;
$breakpoint-desktop: 1024px;
"#;

    pub const MIXINS: &str = r#"@use 'variables' as *;

@mixin flex-center {
  display: flex;
  align-items: center;
  justify-content: center;
}

@mixin respond-to($breakpoint) {
  @media (min-width: $breakpoint) {
    @content;
  }
}
"#;
}

pub mod base {
    pub const RESET: &str = r#"*,
*::before,
*::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

img {
  max-width: 100%;
  display: block;
}
"#;

    pub const FONTS: &str = r#"$font-family-base: 'Helvetica Neue', Helvetica, Arial, sans-serif;
$font-family-mono: 'SFMono-Regular', Consolas, monospace;

$font-size-base: 1rem;
$line-height-base: 1.5;
"#;

    pub const TAGS: &str = r#"@use '../abstracts/variables' as *;

body {
  color: $color-text;
  background-color: $color-background;
}

a {
  color: $color-primary;
  text-decoration: none;

  &:hover {
    text-decoration: underline;
  }
}
"#;
}

pub mod components {
    pub const BUTTON: &str = r#"@use '../abstracts/variables' as *;

.button {
  display: inline-block;
  padding: $spacing-unit ($spacing-unit * 2);
  border: none;
  border-radius: 4px;
  background-color: $color-primary;
  color: $color-background;
  cursor: pointer;

  &:hover {
    opacity: 0.9;
  }
}
"#;
}

pub mod layout {
    pub const HEADER: &str = r#"@use '../abstracts/variables' as *;
@use '../abstracts/mixins' as *;

.site-header {
  @include flex-center;
  justify-content: space-between;
  padding: $spacing-unit * 2;
  border-bottom: 1px solid $color-text;
}
"#;

    pub const FOOTER: &str = r#"@use '../abstracts/variables' as *;

.site-footer {
  padding: $spacing-unit * 4 0;
  text-align: center;
  font-size: 0.875rem;
}
"#;
}
