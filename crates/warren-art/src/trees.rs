//! Swaying tree at three viewing distances.
//!
//! Each size has the same four-step sway so sets line up when zooming.

/// Small tree, 11 columns wide.
pub const TREE_FAR: &[&[&str]] = &[
    &[
        "     +",
        "    +#+",
        "   +###+",
        "    +#+",
        "   +#-#+",
        "  +#-###+",
        "    .#.",
        "   .###.",
    ],
    &[
        "      +",
        "     +#+",
        "    +###+",
        "    +#+",
        "   +#-#+",
        "  +#-###+",
        "    .#.",
        "   .###.",
    ],
    &[
        "     +",
        "    +#+",
        "   +###+",
        "    +#+",
        "   +#-#+",
        "  +#-###+",
        "    .#.",
        "   .###.",
    ],
    &[
        "    +",
        "   +#+",
        "  +#-#+",
        "    +#+",
        "   +#-#+",
        "  +#-###+",
        "    .#.",
        "   .###.",
    ],
];

/// Medium tree, 21 columns wide.
pub const TREE_MEDIUM: &[&[&str]] = &[
    &[
        "          +",
        "         +#+",
        "        +#-#+",
        "       +#-###+",
        "        +###+",
        "       +#####+",
        "      +#####-#+",
        "     +#####-###+",
        "       +#####+",
        "      +#####-#+",
        "     +#####-###+",
        "    +#####-#####+",
        "   +#####-#######+",
        "         .#.",
        "         .#.",
        "        .###.",
    ],
    &[
        "           +",
        "          +#+",
        "         +###+",
        "        +#####+",
        "         +#-#+",
        "        +#-###+",
        "      +#####-#+",
        "     +#####-###+",
        "       +#####+",
        "      +#####-#+",
        "     +#####-###+",
        "    +#####-#####+",
        "   +#####-#######+",
        "         .#.",
        "         .#.",
        "        .###.",
    ],
    &[
        "          +",
        "         +#+",
        "        +#-#+",
        "       +#-###+",
        "        +###+",
        "       +#####+",
        "      +#####-#+",
        "     +#####-###+",
        "       +#####+",
        "      +#####-#+",
        "     +#####-###+",
        "    +#####-#####+",
        "   +#####-#######+",
        "         .#.",
        "         .#.",
        "        .###.",
    ],
    &[
        "         +",
        "        +#+",
        "       +###+",
        "      +#####+",
        "       +###+",
        "      +#####+",
        "      +#####-#+",
        "     +#####-###+",
        "       +#####+",
        "      +#####-#+",
        "     +#####-###+",
        "    +#####-#####+",
        "   +#####-#######+",
        "         .#.",
        "         .#.",
        "        .###.",
    ],
];

/// Large tree, 33 columns wide.
pub const TREE_CLOSE: &[&[&str]] = &[
    &[
        "                +",
        "               +#+",
        "              +#-#+",
        "             +#-###+",
        "            +#-#####+",
        "              +#-#+",
        "             +#-###+",
        "            +#-#####+",
        "           +#-#######+",
        "          +#-#########+",
        "         +#-###########+",
        "            +#######+",
        "           +#########+",
        "          +#########-#+",
        "         +#########-###+",
        "        +#########-#####+",
        "       +#########-#######+",
        "      +#########-#########+",
        "          +#-#########+",
        "         +#-###########+",
        "        +#-###########-#+",
        "       +#-###########-###+",
        "      +#-###########-#####+",
        "     +#-###########-#######+",
        "    +#-###########-#########+",
        "   +#-###########-###########+",
        "               .#.",
        "               .#.",
        "               .#.",
        "               .#.",
        "              .###.",
    ],
    &[
        "                 +",
        "                +#+",
        "               +###+",
        "              +#####+",
        "             +#######+",
        "               +###+",
        "              +#####+",
        "             +#######+",
        "            +#########+",
        "           +#########-#+",
        "          +#########-###+",
        "             +#####-#+",
        "            +#####-###+",
        "          +#########-#+",
        "         +#########-###+",
        "        +#########-#####+",
        "       +#########-#######+",
        "      +#########-#########+",
        "          +#-#########+",
        "         +#-###########+",
        "        +#-###########-#+",
        "       +#-###########-###+",
        "      +#-###########-#####+",
        "     +#-###########-#######+",
        "    +#-###########-#########+",
        "   +#-###########-###########+",
        "               .#.",
        "               .#.",
        "               .#.",
        "               .#.",
        "              .###.",
    ],
    &[
        "                +",
        "               +#+",
        "              +#-#+",
        "             +#-###+",
        "            +#-#####+",
        "              +#-#+",
        "             +#-###+",
        "            +#-#####+",
        "           +#-#######+",
        "          +#-#########+",
        "         +#-###########+",
        "            +#######+",
        "           +#########+",
        "          +#########-#+",
        "         +#########-###+",
        "        +#########-#####+",
        "       +#########-#######+",
        "      +#########-#########+",
        "          +#-#########+",
        "         +#-###########+",
        "        +#-###########-#+",
        "       +#-###########-###+",
        "      +#-###########-#####+",
        "     +#-###########-#######+",
        "    +#-###########-#########+",
        "   +#-###########-###########+",
        "               .#.",
        "               .#.",
        "               .#.",
        "               .#.",
        "              .###.",
    ],
    &[
        "               +",
        "              +#+",
        "             +###+",
        "            +#####+",
        "           +#####-#+",
        "             +###+",
        "            +#####+",
        "           +#####-#+",
        "          +#####-###+",
        "         +#####-#####+",
        "        +#####-#######+",
        "           +#-#####+",
        "          +#-#######+",
        "          +#########-#+",
        "         +#########-###+",
        "        +#########-#####+",
        "       +#########-#######+",
        "      +#########-#########+",
        "          +#-#########+",
        "         +#-###########+",
        "        +#-###########-#+",
        "       +#-###########-###+",
        "      +#-###########-#####+",
        "     +#-###########-#######+",
        "    +#-###########-#########+",
        "   +#-###########-###########+",
        "               .#.",
        "               .#.",
        "               .#.",
        "               .#.",
        "              .###.",
    ],
];
