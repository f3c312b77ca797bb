pub mod leaderboard;
pub mod spinner;
pub mod title;
