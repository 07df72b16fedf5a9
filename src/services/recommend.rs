use crate::models::{HostingInfo, SizeBreakdown};

pub const IMAGE_RATIO_THRESHOLD: f64 = 0.6;
pub const SCRIPT_RATIO_THRESHOLD: f64 = 0.3;
pub const THIRD_PARTY_RATIO_THRESHOLD: f64 = 0.3;

pub const IMAGES_ADVICE: &str =
    "🖼️ Vos images sont très lourdes. Passez-les au format WebP et compressez-les.";
pub const SCRIPTS_ADVICE: &str =
    "📜 Les scripts JavaScript sont lourds. Assurez-vous de ne charger que le nécessaire.";
pub const GREEN_ADVICE: &str =
    "🌱 Votre hébergeur n'est pas répertorié comme vert. Changer pour un hébergeur vert est l'action la plus impactante.";
pub const THIRD_PARTY_ADVICE: &str =
    "🔗 Les ressources tierces représentent une part importante du poids de la page. Limitez les services externes.";
pub const WELL_OPTIMIZED: &str = "✅ Excellent ! Votre site semble bien optimisé.";

/// Evaluates the fixed rule set, in order. Rules are independent; any subset
/// may fire. An empty result collapses to the single positive message.
pub fn evaluate(
    breakdown: &SizeBreakdown,
    hosting: &HostingInfo,
    third_party_bytes: u64,
) -> Vec<String> {
    let total = breakdown.total_bytes();
    let mut recommendations = Vec::new();

    if ratio(breakdown.images, total) > IMAGE_RATIO_THRESHOLD {
        recommendations.push(IMAGES_ADVICE.to_string());
    }
    if ratio(breakdown.scripts, total) > SCRIPT_RATIO_THRESHOLD {
        recommendations.push(SCRIPTS_ADVICE.to_string());
    }
    if !hosting.is_green {
        recommendations.push(GREEN_ADVICE.to_string());
    }
    if ratio(third_party_bytes, total) > THIRD_PARTY_RATIO_THRESHOLD {
        recommendations.push(THIRD_PARTY_ADVICE.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(WELL_OPTIMIZED.to_string());
    }
    recommendations
}

// A zero total must read as a zero ratio, never a division error.
fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
