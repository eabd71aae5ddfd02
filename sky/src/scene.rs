use crate::{
    surface::Headless, Comet, Emissions, FireworkParticle, FireworkRocket, Particle, Random,
    SkyConfig, Sparkle, Surface, Viewport,
};

/// Bounding box of the element whose appearance sets off the fireworks,
/// in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBox {
    pub top: f64,
    pub bottom: f64,
}

/// Counters of everything the [`Scene`] has launched so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub frames: u64,
    pub primary_comets: usize,
    pub paired_comets: usize,
    pub salvo_rockets: usize,
    pub volley_rockets: usize,
    pub volleys: usize,
}

impl SceneStats {
    pub fn rockets(&self) -> usize {
        self.salvo_rockets + self.volley_rockets
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    PairedComet,
    SalvoRocket,
    Volley,
}

/// An action that runs on the first frame whose clock reaches `fire_at`.
#[derive(Clone, Copy, Debug)]
struct Deferred {
    fire_at: f64,
    action: Action,
}

/// Owns every live particle and decides when new ones appear.
pub struct Scene<R> {
    config: SkyConfig,
    viewport: Viewport,
    rng: R,
    clock: f64,
    spawn_timer: f64,
    next_spawn: f64,
    deferred: Vec<Deferred>,
    barrage_fired: bool,
    stats: SceneStats,
    comets: Vec<Comet>,
    sparkles: Vec<Sparkle>,
    rockets: Vec<FireworkRocket>,
    fragments: Vec<FireworkParticle>,
}

impl<R: Random> Scene<R> {
    pub fn new(config: SkyConfig, viewport: Viewport, mut rng: R) -> Scene<R> {
        let next_spawn = rng.range(config.first_comet_delay.0, config.first_comet_delay.1);

        Scene {
            config,
            viewport,
            rng,
            clock: 0.0,
            spawn_timer: 0.0,
            next_spawn,
            deferred: Vec::new(),
            barrage_fired: false,
            stats: SceneStats::default(),
            comets: Vec::new(),
            sparkles: Vec::new(),
            rockets: Vec::new(),
            fragments: Vec::new(),
        }
    }

    /// Advances the scene by `dt` milliseconds and draws it onto `surface`.
    ///
    /// Every particle is updated and pruned even when drawing fails; the first
    /// drawing error is returned.
    pub fn frame<S: Surface>(
        &mut self,
        dt: f64,
        surface: &mut S,
        trigger: Option<TriggerBox>,
    ) -> Result<(), S::Error> {
        self.clock += dt;
        self.stats.frames += 1;

        let cleared = surface.clear();

        if let Some(trigger) = trigger {
            self.check_trigger(trigger);
        }

        self.spawn_comets(dt);
        self.fire_deferred();

        let mut emissions = Emissions::default();

        let comets = scan(&mut self.comets, &mut self.rng, &mut emissions, surface);
        self.sparkles.append(&mut emissions.sparkles);
        let sparkles = scan(&mut self.sparkles, &mut self.rng, &mut emissions, surface);
        let rockets = scan(&mut self.rockets, &mut self.rng, &mut emissions, surface);
        self.fragments.append(&mut emissions.fragments);
        let fragments = scan(&mut self.fragments, &mut self.rng, &mut emissions, surface);

        cleared.and(comets).and(sparkles).and(rockets).and(fragments)
    }

    /// Advances the scene by `dt` milliseconds without drawing anything.
    pub fn step(&mut self, dt: f64, trigger: Option<TriggerBox>) {
        match self.frame(dt, &mut Headless, trigger) {
            Ok(()) => (),
            Err(never) => match never {},
        }
    }

    /// Later spawns use the new viewport. Live particles keep their state.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn check_trigger(&mut self, trigger: TriggerBox) {
        if self.barrage_fired {
            return;
        }

        if trigger.top < self.viewport.height * self.config.trigger_ratio && trigger.bottom > 0.0 {
            self.barrage_fired = true;
            self.schedule_barrage();
        }
    }

    /// Opening salvo of staggered rockets, followed by a steady run of volleys.
    fn schedule_barrage(&mut self) {
        for i in 0..self.config.salvo_rockets {
            self.defer(i as f64 * self.config.salvo_stagger, Action::SalvoRocket);
        }

        for k in 1..=self.config.volley_count {
            self.defer(k as f64 * self.config.volley_cadence, Action::Volley);
        }
    }

    fn spawn_comets(&mut self, dt: f64) {
        self.spawn_timer += dt;

        if self.spawn_timer < self.next_spawn {
            return;
        }

        self.comets.push(Comet::new(&self.viewport, &mut self.rng));
        self.stats.primary_comets += 1;

        if self.rng.random() < self.config.comet_pair_chance {
            let (low, high) = self.config.comet_pair_delay;
            let delay = self.rng.range(low, high);
            self.defer(delay, Action::PairedComet);
        }

        let (low, high) = self.config.comet_interval;
        self.spawn_timer = 0.0;
        self.next_spawn = self.rng.range(low, high);
    }

    fn defer(&mut self, delay: f64, action: Action) {
        self.deferred.push(Deferred {
            fire_at: self.clock + delay,
            action,
        });
    }

    fn fire_deferred(&mut self) {
        let clock = self.clock;
        let mut due = Vec::new();

        self.deferred.retain(|deferred| {
            if deferred.fire_at <= clock {
                due.push(*deferred);
                false
            } else {
                true
            }
        });

        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at));

        for deferred in due {
            match deferred.action {
                Action::PairedComet => {
                    self.comets.push(Comet::new(&self.viewport, &mut self.rng));
                    self.stats.paired_comets += 1;
                }
                Action::SalvoRocket => {
                    self.launch_rocket();
                    self.stats.salvo_rockets += 1;
                }
                Action::Volley => {
                    self.launch_rocket();
                    self.stats.volley_rockets += 1;

                    if self.rng.random() < self.config.volley_double_chance {
                        self.launch_rocket();
                        self.stats.volley_rockets += 1;
                    }

                    self.stats.volleys += 1;
                }
            }
        }
    }

    fn launch_rocket(&mut self) {
        let (x_low, x_high) = self.config.target_x;
        let (y_low, y_high) = self.config.target_y;

        let target = (
            self.viewport.width * self.rng.range(x_low, x_high),
            self.viewport.height * self.rng.range(y_low, y_high),
        );

        self.rockets
            .push(FireworkRocket::new(target, &self.viewport, &mut self.rng));
    }

    pub fn config(&self) -> &SkyConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Milliseconds simulated since the scene was created.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Current threshold the comet spawn timer has to reach.
    pub fn next_spawn(&self) -> f64 {
        self.next_spawn
    }

    pub fn barrage_fired(&self) -> bool {
        self.barrage_fired
    }

    /// Deferred actions that have not fired yet.
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    pub fn comets(&self) -> &[Comet] {
        &self.comets
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn rockets(&self) -> &[FireworkRocket] {
        &self.rockets
    }

    pub fn fragments(&self) -> &[FireworkParticle] {
        &self.fragments
    }

    /// Live particles across all four collections.
    pub fn population(&self) -> usize {
        self.comets.len() + self.sparkles.len() + self.rockets.len() + self.fragments.len()
    }
}

/// Updates, draws and prunes `particles`, back to front so removals never
/// disturb the survivors still to be visited.
fn scan<P: Particle, R: Random, S: Surface>(
    particles: &mut Vec<P>,
    rng: &mut R,
    emissions: &mut Emissions,
    surface: &mut S,
) -> Result<(), S::Error> {
    let mut result = Ok(());

    for i in (0..particles.len()).rev() {
        let particle = &mut particles[i];

        particle.update(rng, emissions);
        let drawn = particle.draw(surface);

        if result.is_ok() {
            result = drawn;
        }

        if particle.is_dead() {
            particles.remove(i);
        }
    }

    result
}
