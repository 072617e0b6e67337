//! Deputados: dados cadastrais e atividade parlamentar dos deputados.

use super::{ITENS, PAGINA};
use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/deputados",
        upstream_path: "deputados",
        category: "Deputados",
        description: "Retorna uma lista de dados básicos sobre deputados que estiveram em exercício parlamentar.",
        path_params: &[],
        query_params: &[
            QueryParam::int("id").repeated(),
            QueryParam::text("nome"),
            QueryParam::text("siglaUf"),
            QueryParam::text("siglaPartido"),
            PAGINA,
            ITENS,
        ],
    },
    Route {
        path: "/deputados/{id}",
        upstream_path: "deputados/{id}",
        category: "Deputados",
        description: "Retorna os dados cadastrais de um parlamentar específico.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/deputados/{id}/despesas",
        upstream_path: "deputados/{id}/despesas",
        category: "Deputados",
        description: "Retorna as despesas com exercício parlamentar do deputado.",
        path_params: &[PathParam::int("id")],
        query_params: &[
            QueryParam::int("idLegislatura"),
            QueryParam::int("ano"),
            QueryParam::int("mes"),
            QueryParam::text("cnpjCpfFornecedor"),
            PAGINA,
            ITENS,
            QueryParam::text("ordenarPor"),
        ],
    },
    Route {
        path: "/deputados/{id}/discursos",
        upstream_path: "deputados/{id}/discursos",
        category: "Deputados",
        description: "Lista de discursos feitos por um deputado.",
        path_params: &[PathParam::int("id")],
        query_params: &[QueryParam::text("dataInicio"), QueryParam::text("dataFim")],
    },
    Route {
        path: "/deputados/{id}/eventos",
        upstream_path: "deputados/{id}/eventos",
        category: "Deputados",
        description: "Lista de eventos com a participação de um deputado.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/deputados/{id}/frentes",
        upstream_path: "deputados/{id}/frentes",
        category: "Deputados",
        description: "Frentes parlamentares das quais um deputado é integrante.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/deputados/{id}/ocupacoes",
        upstream_path: "deputados/{id}/ocupacoes",
        category: "Deputados",
        description: "Empregos e atividades que o deputado já teve.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/deputados/{id}/orgaos",
        upstream_path: "deputados/{id}/orgaos",
        category: "Deputados",
        description: "Órgãos dos quais um deputado é integrante.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/deputados/{id}/historico",
        upstream_path: "deputados/{id}/historico",
        category: "Deputados",
        description: "Lista de mudanças no exercício parlamentar de um deputado (mudança de partido, licenças, etc.).",
        path_params: &[PathParam::int("id")],
        query_params: &[QueryParam::text("dataInicio"), QueryParam::text("dataFim")],
    },
    Route {
        path: "/deputados/{id}/mandatosExternos",
        upstream_path: "deputados/{id}/mandatosExternos",
        category: "Deputados",
        description: "Lista outros cargos eletivos que o parlamentar já exerceu fora da Câmara dos Deputados.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/deputados/{id}/profissoes",
        upstream_path: "deputados/{id}/profissoes",
        category: "Deputados",
        description: "Apresenta as profissões que o parlamentar declarou à Câmara.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
