//! Headless round simulator.
//!
//! Plays complete rounds against the engine with no terminal attached and
//! prints summary statistics. Useful for sanity-checking scoring and for
//! eyeballing how much a hold policy is worth:
//!
//! ```text
//! simulate --rounds 10000 --seed 7 --policy greedy
//! ```

use anyhow::{anyhow, Result};

use tui_yatzy::core::{category_score, DiceSource, RoundEngine, SpotRng};
use tui_yatzy::store::MemoryScoreStore;
use tui_yatzy::types::{Category, RoundPhase, NUM_DICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    /// Uniform random holds, uniform random category at commit time.
    Random,
    /// Chase the open face with the highest current payout.
    Greedy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SimConfig {
    rounds: u32,
    seed: u32,
    policy: Policy,
}

fn parse_args(args: &[String]) -> Result<SimConfig> {
    let mut rounds = 1000u32;
    let mut seed = 1u32;
    let mut policy = Policy::Random;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rounds" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("simulate: missing value for --rounds"))?;
                rounds = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("simulate: invalid --rounds value: {}", v))?;
                if rounds == 0 {
                    return Err(anyhow!("simulate: --rounds must be at least 1"));
                }
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("simulate: missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("simulate: invalid --seed value: {}", v))?;
            }
            "--policy" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("simulate: missing value for --policy"))?;
                policy = match v.as_str() {
                    "random" => Policy::Random,
                    "greedy" => Policy::Greedy,
                    other => {
                        return Err(anyhow!(
                            "simulate: unknown policy: {} (expected random or greedy)",
                            other
                        ))
                    }
                };
            }
            other => {
                return Err(anyhow!(
                    "simulate: unknown argument: {} (usage: simulate [--rounds N] [--seed N] [--policy random|greedy])",
                    other
                ));
            }
        }
        i += 1;
    }

    Ok(SimConfig {
        rounds,
        seed,
        policy,
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    eprintln!(
        "[simulate] playing {} rounds, seed {}, policy {:?}",
        config.rounds, config.seed, config.policy
    );

    let mut engine = RoundEngine::new(
        "sim",
        DiceSource::seeded(config.seed),
        MemoryScoreStore::default(),
    );
    // Policy decisions draw from their own stream so changing the policy
    // never perturbs the dice.
    let mut choices = SpotRng::new(config.seed.wrapping_mul(31).wrapping_add(7));

    let mut scores: Vec<u32> = Vec::with_capacity(config.rounds as usize);
    let mut bonus_rounds = 0u32;

    for _ in 0..config.rounds {
        play_round(&mut engine, &mut choices, config.policy)?;
        if engine.breakdown().bonus > 0 {
            bonus_rounds += 1;
        }
        let finished = engine
            .take_finished()
            .ok_or_else(|| anyhow!("simulate: round completed without a result"))?;
        scores.push(finished.record.score);
        engine.reset_round("sim");
    }

    report(&scores, bonus_rounds);
    Ok(())
}

fn play_round(
    engine: &mut RoundEngine<MemoryScoreStore>,
    choices: &mut SpotRng,
    policy: Policy,
) -> Result<()> {
    loop {
        match engine.phase() {
            RoundPhase::AwaitingThrow => {
                engine.throw_dice()?;
            }
            RoundPhase::MidTurn => {
                match policy {
                    Policy::Random => random_holds(engine, choices)?,
                    Policy::Greedy => greedy_holds(engine)?,
                }
                engine.throw_dice()?;
            }
            RoundPhase::AwaitingCommit => {
                let category = match policy {
                    Policy::Random => random_category(engine, choices),
                    Policy::Greedy => greedy_category(engine),
                };
                engine.commit_category(category)?;
            }
            RoundPhase::Complete => return Ok(()),
        }
    }
}

fn random_holds(engine: &mut RoundEngine<MemoryScoreStore>, choices: &mut SpotRng) -> Result<()> {
    for die in 0..NUM_DICE {
        let hold = choices.next_range(2) == 1;
        if engine.held()[die] != hold {
            engine.toggle_hold(die)?;
        }
    }
    Ok(())
}

fn random_category(
    engine: &RoundEngine<MemoryScoreStore>,
    choices: &mut SpotRng,
) -> Category {
    let open = engine.unlocked_categories();
    let pick = choices.next_range(open.len() as u32) as usize;
    open[pick]
}

/// Hold every die showing the open face that currently pays the most.
fn greedy_holds(engine: &mut RoundEngine<MemoryScoreStore>) -> Result<()> {
    let target = greedy_category(engine).face();
    let spots = *engine.spots();
    for die in 0..NUM_DICE {
        let hold = spots[die] == target;
        if engine.held()[die] != hold {
            engine.toggle_hold(die)?;
        }
    }
    Ok(())
}

fn greedy_category(engine: &RoundEngine<MemoryScoreStore>) -> Category {
    let mut best = engine.unlocked_categories()[0];
    let mut best_score = 0u32;
    for cat in engine.unlocked_categories() {
        let score = category_score(engine.spots(), cat);
        // Ties go to the higher face so late rerolls chase bigger payouts.
        if score >= best_score {
            best = cat;
            best_score = score;
        }
    }
    best
}

fn report(scores: &[u32], bonus_rounds: u32) {
    let count = scores.len() as u32;
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    let mean = sum as f64 / f64::from(count);
    let min = scores.iter().copied().min().unwrap_or(0);
    let max = scores.iter().copied().max().unwrap_or(0);
    let bonus_rate = f64::from(bonus_rounds) / f64::from(count);

    println!("rounds: {count}");
    println!("mean:   {mean:.2}");
    println!("min:    {min}");
    println!("max:    {max}");
    println!("bonus:  {:.1}% of rounds", bonus_rate * 100.0);
}
