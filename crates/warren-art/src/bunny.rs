//! Bunny hop cycle, converted from a short clip at 40 columns.

/// Hop cycle, facing left. Mirror for the right-facing variant.
pub const BUNNY_LEFT: &[&[&str]] = &[
    &[
        "       +-",
        "      #-+-",
        "      #-+--##+.        -----",
        "      #+#+---#.    #+++-----++.",
        "  ..#+-#---#..###+-------------++.",
        " -+------------------------------#.",
        " +--+#+--++---------------++------#.++.",
        "-#+---++++++----------+++++--------#.+.",
        " -++###++##+++----++++++##-------++#-",
        "          .#++++++++#+++#++----++#.",
        "              +##++++##.###++++++#.",
        "                -+-+#+#    .#++++.",
        "               .#+++#++# +#--++#.",
        "               +++++-++  -+++++",
    ],
    &[
        "     +#",
        "   .#--#   .--.",
        "   .#--#  ++--#",
        "    -+++#+.--#.    ...###---+##.",
        "  --###+-++-  --+##-------------++. ..",
        " ++-------++++--------------------++.+.",
        "-+-+#++----+--------------+-------+#+-",
        ".+-+---+++++-------+-+++++++-----+#-",
        " ..##-.##+++++++++++++++###+++-----#",
        "       -#+++++#+####+       -##+++-++",
        "     -+--++###.                .#-+++",
        "   .+-++##+++-.                #-++#.",
        "    -+++  ++                   .++.",
    ],
    &[
        "",
        "   .-.                    ----- .+-",
        "   #-#. -+++-        -#+++-----++-.#",
        "   #-#..#-.++  ..+#---------------#",
        "   .++#-.++  -++------------------#",
        "   .++++###++-----------+++------+#",
        " +-------+------------++++++------+#.",
        ".+-+#+----+--------++++++##++++----++.",
        "-#----++++++++++++++++##.. .-#++++---#.",
        " +#####    #+++++###+           -##+-+-",
        "          #---####-                #++#",
        "       .#+++#-#++-.                ###.",
        "       ++++  -++-",
    ],
    &[
        "     +#",
        "    -+-+.   .--        .---",
        "     ++++  ++--#   .#+++---+++#",
        "      #++#+---# .+-------------++.",
        "       ##+-++.--+----------------+-.-",
        "   #+++---++++----------++---------#.+.",
        "  #--##----+---------+++++--------++#+.",
        " ++-----++++------++++++#+++----+++#-",
        " .##+++##+++++-++++++###-#+++++++#.",
        "          #++++####        ###++#-",
        "          -+-+#.#++-      -+++-++.",
        "         +-++#. -++#     ++-+##.",
        "        -+++   .+++       ++-",
    ],
];
