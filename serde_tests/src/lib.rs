#[cfg(test)]
mod tests {
    use ron;
    use rs_mastermind::*;

    #[test]
    fn guess_history_serde() {
        let mut session =
            GameSession::with_secret(GameConfig::default(), "rgby".parse().unwrap());
        session.submit("rrbb".parse().unwrap()).unwrap();
        session.submit("rgby".parse().unwrap()).unwrap();

        let ser = ron::to_string(session.history());
        assert!(ser.is_ok());

        let deser = ron::from_str::<Vec<GuessRecord>>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap().as_slice(), session.history());
    }

    #[test]
    fn game_status_serde() {
        let ser = ron::to_string(&GameStatus::Won);
        assert!(ser.is_ok());

        let deser = ron::from_str::<GameStatus>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), GameStatus::Won);
    }
}
