//! Report fixtures shared by the integration tests.

pub const LOCATION: &str = "Tribe 0987, , Current Hex = QQ 0203, (Previous Hex = QQ 0101)\n";

pub const HEADER: &str = "Current Turn 899-12 (#0), Winter, FINE\tNext Turn 900-01 (#1), 29/10/2023\n";

/// A clan report with a tribe, a courier sent to a hex and a following element
pub const CLAN_REPORT: &str = concat!(
    "Tribe 0987, , Current Hex = QQ 0203, (Previous Hex = QQ 0101)\n",
    "Current Turn 899-12 (#0), Winter, FINE\tNext Turn 900-01 (#1), 29/10/2023\n",
    "Tribe Movement: Move NE-PR, River S\\SE-GH, (Sight Land - N/NE, Sight Water - S)\n",
    "Scout 1:Scout N-PR, O NE\\N-PR, Nothing of interest found\n",
    "Scout 2:Scout SE-GH, Find Iron Ore\n",
    "0987 Status: GRASSY HILLS, River S, 1987e1\n",
    "\n",
    "Courier 0987c1, , Current Hex = QQ 0303, (Previous Hex = QQ 0203)\n",
    "Courier Goes to QQ 0405\n",
    "\n",
    "Element 0987e1, Scouting party, Current Hex = ## 1304, (Previous Hex = N/A)\n",
    "Element Follows 0987\n",
);

/// A report whose header reads as year 0, month 0
pub const ZERO_TURN_REPORT: &str = concat!(
    "Tribe 0987, , Current Hex = QQ 0203, (Previous Hex = QQ 0101)\n",
    "Current Turn 0-0 (#0)\n",
    "Tribe Movement: Move NE-PR\n",
);

/// Wrap `body` in a tribe section of the standard turn
pub fn tribe_report(body: &str) -> String {
    format!("{LOCATION}{HEADER}{body}")
}
