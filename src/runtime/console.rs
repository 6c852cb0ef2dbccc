//! The line-oriented command console driving a [`PlaybackController`].

use std::io::BufRead;

use crate::audio::Player;
use crate::playback::{PlaybackController, Report};

use super::commands::{Command, HELP};

/// Apply one parsed command. Returns `false` when the session should end.
pub fn dispatch<P: Player, R: Report>(
    controller: &mut PlaybackController<P, R>,
    command: Command,
) -> bool {
    match command {
        Command::Help => HELP.iter().for_each(|line| controller.say(line)),
        Command::Count => {
            let line = format!("{} tracks", controller.number_of_tracks());
            controller.say(&line);
        }
        Command::List(None) => controller.list_all(),
        Command::List(Some(i)) => controller.list_track(i),
        Command::Shuffled => controller.list_shuffled(),
        Command::Artist(artist) => controller.list_by_artist(&artist),
        Command::Title(title) => controller.find_in_title(&title),
        Command::Play(i) => controller.play_at(i),
        Command::First => controller.play_first(),
        Command::Random => controller.play_random(),
        Command::Stop => controller.stop(),
        Command::Status => controller.report_playing_state(),
        Command::Shuffle => controller.play_shuffle_all(),
        Command::Consume => controller.play_shuffle_consume(),
        Command::Remove(i) => controller.remove_track(i),
        Command::RemoveArtist(artist) => controller.remove_by_artist(&artist),
        Command::RemoveTitle(title) => controller.remove_by_title(&title),
        Command::Year(i, year) => controller.set_year_of_track(i, year),
        Command::Add(filename) => controller.add_file(&filename),
        Command::Quit => return false,
    }
    true
}

/// Read commands from `input` until `quit` or end of input.
///
/// `prompt` runs before each line is read. Parse errors are reported and the
/// session continues.
pub fn run_session<B, P, R>(
    input: B,
    controller: &mut PlaybackController<P, R>,
    mut prompt: impl FnMut(),
) -> std::io::Result<()>
where
    B: BufRead,
    P: Player,
    R: Report,
{
    prompt();
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            log::debug!("command: {}", line.trim());
            match Command::parse(&line) {
                Ok(command) => {
                    if !dispatch(controller, command) {
                        return Ok(());
                    }
                }
                Err(e) => controller.say(&e.to_string()),
            }
        }
        prompt();
    }
    Ok(())
}
