// Prompt construction for the suggestion module.

/// Career-consultant prompt asking for three short objective options,
/// returned as plain blocks separated by blank lines.
pub fn objective_prompt(job_title: &str, experience_summary: &str) -> String {
    format!(
        "Aja como um consultor de carreira especialista.\n\
         Escreva 3 opções de \"Objetivo Profissional\" curtas, diretas e impactantes \
         (máximo 3 linhas cada) para um currículo.\n\n\
         Perfil do candidato:\n\
         Cargo desejado/atual: {job_title}\n\
         Resumo da experiência/habilidades: {experience_summary}\n\n\
         Retorne APENAS as 3 opções em formato de lista simples, sem numeração ou \
         texto introdutório. Separe-as por quebras de linha duplas."
    )
}
