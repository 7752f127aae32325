/// One repeating tile of speckled ground, 60 columns wide.
pub const GROUND_TILE: &[&str] = &[
    "                                                            ",
    "      .                  .                .                 ",
    "  .       .      +           .       .          .     +     ",
    "     .        .      .   +       .        .  +      .    .  ",
    " .      + .      .  .      . .      +  .      .   .     .   ",
    "   . .     .  +    .   . .    .  .     . +     . .   +   .  ",
];
