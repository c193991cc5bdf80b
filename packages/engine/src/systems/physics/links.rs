use crate::domain::{Link, Particle};

/// Relax every link once, in creation order. Chains converge over substeps.
pub fn apply_links(particles: &mut [Particle], links: &[Link]) {
    for link in links {
        link.relax(particles);
    }
}
