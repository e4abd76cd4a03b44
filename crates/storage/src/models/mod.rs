mod age_group;
mod event;
mod final_score;
mod judge_score;
mod news;
mod profile;
mod registrant;
mod registration;
mod tournament;
mod tournament_event;
mod user_account;

pub use age_group::AgeGroup;
pub use event::Event;
pub use final_score::FinalScore;
pub use judge_score::JudgeScore;
pub use news::News;
pub use profile::Profile;
pub use registrant::Registrant;
pub use registration::Registration;
pub use tournament::Tournament;
pub use tournament_event::TournamentEvent;
pub use user_account::UserAccount;
