//! Referências: tabelas de domínio usadas pelos demais endpoints.

use crate::route::Route;

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/referencias/proposicoes/siglaTipo",
        upstream_path: "referencias/proposicoes/siglaTipo",
        category: "Referências",
        description: "Lista os tipos de proposição.",
        path_params: &[],
        query_params: &[],
    },
    Route {
        path: "/referencias/proposicoes/temas",
        upstream_path: "referencias/proposicoes/temas",
        category: "Referências",
        description: "Retorna a lista de temas de proposições.",
        path_params: &[],
        query_params: &[],
    },
    Route {
        path: "/referencias/situacoesDeputado",
        upstream_path: "referencias/situacoesDeputado",
        category: "Referências",
        description: "Lista as possíveis situações de um deputado.",
        path_params: &[],
        query_params: &[],
    },
    Route {
        path: "/referencias/situacoesProposicao",
        upstream_path: "referencias/situacoesProposicao",
        category: "Referências",
        description: "Lista as possíveis situações de uma proposição.",
        path_params: &[],
        query_params: &[],
    },
    Route {
        path: "/referencias/tiposOrgao",
        upstream_path: "referencias/tiposOrgao",
        category: "Referências",
        description: "Lista de tipos de órgãos da Câmara.",
        path_params: &[],
        query_params: &[],
    },
    Route {
        path: "/referencias/ufs",
        upstream_path: "referencias/ufs",
        category: "Referências",
        description: "Lista de Unidades Federativas do Brasil.",
        path_params: &[],
        query_params: &[],
    },
];
