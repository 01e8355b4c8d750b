//! Labelled lines shown next to a simulation: option labels, the summary card
//! rows and the advisory texts.

use serde::Serialize;

use crate::core::{PayoutMode, QuotaBreakdown, SimulationResult, Tier};
use crate::format::{brl, pct};

pub const EMPTY_PROMPT: &str = "Informe um valor válido para ver os resultados.";

pub const DISCLAIMER: &str = "Avisos: Simulação ilustrativa com rentabilidade pré-fixada. \
Estrutura via SCP; operações de carro por assinatura premium. Não se trata de produto bancário.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

impl SummaryRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

pub fn tier_option_label(tier: &Tier) -> String {
    format!(
        "{} • cota {} • {}m • {}/m",
        tier.name,
        brl(tier.quota_value),
        tier.term_months,
        pct(tier.monthly_rate)
    )
}

pub fn minimum_hint(tier: &Tier) -> String {
    format!("Mínimo por cota no {}: {}.", tier.name, brl(tier.quota_value))
}

pub fn mode_label(mode: PayoutMode) -> &'static str {
    match mode {
        PayoutMode::Monthly => "Recebimento Mensal",
        PayoutMode::Bullet => "Bullet (no vencimento)",
    }
}

pub fn quota_label(count: u64) -> String {
    if count == 1 {
        "1 cota".to_string()
    } else {
        format!("{count} cotas")
    }
}

pub fn summary_rows(tier: &Tier, result: &SimulationResult) -> Vec<SummaryRow> {
    let monthly_label = match result.mode {
        PayoutMode::Monthly => "Rendimento mensal",
        PayoutMode::Bullet => "Rendimento médio mensal (referência)",
    };

    vec![
        SummaryRow::new(
            "Lote selecionado",
            format!(
                "{} | Cota {} | Prazo {} meses | {}/mês",
                tier.name,
                brl(tier.quota_value),
                tier.term_months,
                pct(tier.monthly_rate)
            ),
        ),
        SummaryRow::new("Cotas consideradas", quota_label(result.quota_count)),
        SummaryRow::new("Valor aportado", brl(result.principal)),
        SummaryRow::new("Modalidade", mode_label(result.mode)),
        SummaryRow::new(monthly_label, brl(result.monthly_yield)),
        SummaryRow::new("Rendimento total", brl(result.total_yield)),
        SummaryRow::new("Valor final ao término", brl(result.final_value)),
        SummaryRow::new("Prazo", format!("{} meses", tier.term_months)),
    ]
}

/// Note shown when the contribution is not a whole multiple of the quota.
pub fn advisory(tier: &Tier, quotas: &QuotaBreakdown) -> Option<String> {
    if quotas.quota_count == 0 || quotas.remainder <= 0.0 {
        return None;
    }
    Some(format!(
        "Valor ajustado para {} ({} de {}). A sobra de {} não entra na simulação.",
        brl(quotas.principal),
        quota_label(quotas.quota_count),
        brl(tier.quota_value),
        brl(quotas.remainder)
    ))
}
