//! Define the Brazilian national holiday calendar.
//!
//! Fixed-date national holidays plus Good Friday, for the years listed in [`COVERAGE`]:
//!
//! - New Year's Day (Jan 1)
//! - Good Friday (Easter - 2)
//! - Tiradentes (Apr 21)
//! - Labour Day (May 1)
//! - Independence Day (Sep 7)
//! - Our Lady of Aparecida (Oct 12)
//! - All Souls' Day (Nov 2)
//! - Republic Proclamation Day (Nov 15)
//! - Black Consciousness Day (Nov 20, since 2024)
//! - Christmas Day (Dec 25)
//!
//! Carnival and Corpus Christi are optional points and are not included.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const COVERAGE: Option<(i32, i32)> = Some((2020, 2035));

pub const HOLIDAYS: &[&str] = &[
    // 2020
    "2020-01-01", "2020-04-10", "2020-04-21", "2020-05-01", "2020-09-07",
    "2020-10-12", "2020-11-02", "2020-11-15", "2020-12-25",
    // 2021
    "2021-01-01", "2021-04-02", "2021-04-21", "2021-05-01", "2021-09-07",
    "2021-10-12", "2021-11-02", "2021-11-15", "2021-12-25",
    // 2022
    "2022-01-01", "2022-04-15", "2022-04-21", "2022-05-01", "2022-09-07",
    "2022-10-12", "2022-11-02", "2022-11-15", "2022-12-25",
    // 2023
    "2023-01-01", "2023-04-07", "2023-04-21", "2023-05-01", "2023-09-07",
    "2023-10-12", "2023-11-02", "2023-11-15", "2023-12-25",
    // 2024
    "2024-01-01", "2024-03-29", "2024-04-21", "2024-05-01", "2024-09-07",
    "2024-10-12", "2024-11-02", "2024-11-15", "2024-11-20", "2024-12-25",
    // 2025
    "2025-01-01", "2025-04-18", "2025-04-21", "2025-05-01", "2025-09-07",
    "2025-10-12", "2025-11-02", "2025-11-15", "2025-11-20", "2025-12-25",
    // 2026
    "2026-01-01", "2026-04-03", "2026-04-21", "2026-05-01", "2026-09-07",
    "2026-10-12", "2026-11-02", "2026-11-15", "2026-11-20", "2026-12-25",
    // 2027
    "2027-01-01", "2027-03-26", "2027-04-21", "2027-05-01", "2027-09-07",
    "2027-10-12", "2027-11-02", "2027-11-15", "2027-11-20", "2027-12-25",
    // 2028
    "2028-01-01", "2028-04-14", "2028-04-21", "2028-05-01", "2028-09-07",
    "2028-10-12", "2028-11-02", "2028-11-15", "2028-11-20", "2028-12-25",
    // 2029
    "2029-01-01", "2029-03-30", "2029-04-21", "2029-05-01", "2029-09-07",
    "2029-10-12", "2029-11-02", "2029-11-15", "2029-11-20", "2029-12-25",
    // 2030
    "2030-01-01", "2030-04-19", "2030-04-21", "2030-05-01", "2030-09-07",
    "2030-10-12", "2030-11-02", "2030-11-15", "2030-11-20", "2030-12-25",
    // 2031
    "2031-01-01", "2031-04-11", "2031-04-21", "2031-05-01", "2031-09-07",
    "2031-10-12", "2031-11-02", "2031-11-15", "2031-11-20", "2031-12-25",
    // 2032
    "2032-01-01", "2032-03-26", "2032-04-21", "2032-05-01", "2032-09-07",
    "2032-10-12", "2032-11-02", "2032-11-15", "2032-11-20", "2032-12-25",
    // 2033
    "2033-01-01", "2033-04-15", "2033-04-21", "2033-05-01", "2033-09-07",
    "2033-10-12", "2033-11-02", "2033-11-15", "2033-11-20", "2033-12-25",
    // 2034
    "2034-01-01", "2034-04-07", "2034-04-21", "2034-05-01", "2034-09-07",
    "2034-10-12", "2034-11-02", "2034-11-15", "2034-11-20", "2034-12-25",
    // 2035
    "2035-01-01", "2035-03-23", "2035-04-21", "2035-05-01", "2035-09-07",
    "2035-10-12", "2035-11-02", "2035-11-15", "2035-11-20", "2035-12-25",
];
