// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output file naming for composed images.

use rand::RngCore;

/// Produces file names for composed images.
///
/// The compositor passes its own random source so that a seeded engine yields
/// reproducible names.
pub trait OutputNamer: Send {
    fn next_name(&mut self, rng: &mut dyn RngCore) -> String;
}

/// `meme_<uuid>.jpg`, with the 122 random bits of a v4 UUID drawn from the
/// compositor's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNamer;

impl OutputNamer for RandomNamer {
    fn next_name(&mut self, rng: &mut dyn RngCore) -> String {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let id = uuid::Builder::from_random_bytes(bytes).into_uuid();
        format!("meme_{}.jpg", id.simple())
    }
}

/// `meme_000001.jpg`, `meme_000002.jpg`, ... Unique within one engine only.
#[derive(Debug, Clone, Default)]
pub struct SequentialNamer {
    issued: u64,
}

impl OutputNamer for SequentialNamer {
    fn next_name(&mut self, _rng: &mut dyn RngCore) -> String {
        self.issued += 1;
        format!("meme_{:06}.jpg", self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uuid::Uuid;

    fn uuid_from_name(name: &str) -> Option<Uuid> {
        let id = name.strip_prefix("meme_")?.strip_suffix(".jpg")?;
        Uuid::parse_str(id).ok()
    }

    #[test]
    fn random_names_are_v4_uuids() {
        let mut rng = StdRng::seed_from_u64(1);
        let name = RandomNamer.next_name(&mut rng);
        let id = uuid_from_name(&name).expect("uuid in name");
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn random_names_follow_the_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(RandomNamer.next_name(&mut a), RandomNamer.next_name(&mut b));
        assert_ne!(RandomNamer.next_name(&mut a), RandomNamer.next_name(&mut StdRng::seed_from_u64(43)));
    }

    #[test]
    fn sequential_names_count_up() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut namer = SequentialNamer::default();
        assert_eq!(namer.next_name(&mut rng), "meme_000001.jpg");
        assert_eq!(namer.next_name(&mut rng), "meme_000002.jpg");
    }
}
